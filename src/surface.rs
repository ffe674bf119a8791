use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::gesture::{Handlers, Swipe};
use crate::host::Sample;
use crate::web::WebHost;

#[derive(Properties, PartialEq)]
pub struct SwipeSurfaceProps {
    /// Called with the start sample; returns the handlers for that gesture.
    pub on_start: Callback<(Sample, Event), Handlers<Event>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// A `div` that turns mouse-down and touch-start into swipe gestures.
#[function_component(SwipeSurface)]
pub fn swipe_surface(props: &SwipeSurfaceProps) -> Html {
    // latest on_start, read when a gesture begins
    let on_start = use_mut_ref(|| props.on_start.clone());
    *on_start.borrow_mut() = props.on_start.clone();

    let swipe = {
        let on_start = on_start.clone();
        use_memo((), move |_| {
            WebHost::from_global().map(|host| {
                Swipe::new(host, move |sample, event: &Event| {
                    let cb = on_start.borrow().clone();
                    cb.emit((sample, event.clone()))
                })
            })
        })
    };

    let onmousedown = {
        let swipe = swipe.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(s) = &*swipe {
                s.start(&e);
            }
        })
    };
    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(s) = &*swipe {
                s.start(&e);
            }
        })
    };

    html! {
        <div class={props.class.clone()} style={props.style.clone()} {onmousedown} {ontouchstart}>
            { props.children.clone() }
        </div>
    }
}
