use web_sys::Event;
use yew::prelude::*;
use yew_swipe::{Handlers, Sample, SwipeSurface};

use crate::model::{PadAction, PadState};
use crate::util::{clog, describe_swipe, polyline_points};

#[derive(Properties, PartialEq, Clone)]
pub struct SwipePadProps {
    pub pad: UseReducerHandle<PadState>,
}

#[function_component(SwipePad)]
pub fn swipe_pad(props: &SwipePadProps) -> Html {
    let on_start = {
        let pad = props.pad.clone();
        Callback::from(move |(start, _event): (Sample, Event)| {
            clog(&format!("swipe start ({}, {})", start.client_x, start.client_y));
            pad.dispatch(PadAction::Begin(start));
            let pad_move = pad.clone();
            let pad_up = pad.clone();
            Handlers::new(
                move |s, _e: &Event| pad_move.dispatch(PadAction::Extend(s)),
                move |s, _e: &Event| {
                    clog(&format!("swipe end: {}", describe_swipe(start, s)));
                    pad_up.dispatch(PadAction::Finish(s));
                },
            )
        })
    };

    let pad = &*props.pad;
    let trail = if pad.settings.show_trail && !pad.trail.is_empty() {
        html! {
            <svg style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none;">
                <polyline points={polyline_points(&pad.trail)} fill="none" stroke="#58a6ff" stroke-width="3" stroke-linejoin="round" />
            </svg>
        }
    } else {
        html! {}
    };
    let summary = match pad.last {
        Some(last) => format!("{} ({} samples)", describe_swipe(last.start, last.end), last.samples),
        None => "Swipe anywhere in the pad".to_string(),
    };

    html! {
        <SwipeSurface
            on_start={on_start}
            class={classes!("swipe-pad", pad.active.then_some("swipe-pad--active"))}
            style="position:relative; flex:1; min-height:320px; background:#161b22; border:1px solid #30363d; border-radius:12px; overflow:hidden; touch-action:none; user-select:none;"
        >
            { trail }
            <div style="position:absolute; left:12px; bottom:12px; font-size:13px; opacity:0.8;">
                { summary }
            </div>
        </SwipeSurface>
    }
}
