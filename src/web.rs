// Browser host: window listeners, requestAnimationFrame and DOM event access.
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, MouseEvent, TouchEvent, Window};

use crate::host::{Contact, DeviceClass, EventRegistry, FrameScheduler, PointerEvent, Sample};

pub struct WebHost {
    window: Window,
}

impl WebHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn from_global() -> Option<Rc<Self>> {
        web_sys::window().map(|w| Rc::new(Self::new(w)))
    }
}

/// A registered window listener. Owns the closure the browser calls.
pub struct WebListener {
    name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventRegistry for WebHost {
    type Event = Event;
    type Listener = WebListener;

    fn listen(
        &self,
        name: &'static str,
        passive: bool,
        mut handler: Box<dyn FnMut(&Event)>,
    ) -> WebListener {
        let callback = Closure::wrap(Box::new(move |e: Event| handler(&e)) as Box<dyn FnMut(_)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        let _ = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                name,
                callback.as_ref().unchecked_ref(),
                &options,
            );
        WebListener { name, callback }
    }

    fn unlisten(&self, listener: WebListener) {
        let _ = self.window.remove_event_listener_with_callback(
            listener.name,
            listener.callback.as_ref().unchecked_ref(),
        );
        drop(listener);
    }
}

impl FrameScheduler for WebHost {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let cb = Closure::once_into_js(move |_ts: f64| callback());
        let _ = self.window.request_animation_frame(cb.unchecked_ref());
    }
}

fn touch_supported() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("TouchEvent")).unwrap_or(false)
}

impl PointerEvent for Event {
    fn device_class(&self) -> DeviceClass {
        if touch_supported() && self.is_instance_of::<TouchEvent>() {
            DeviceClass::Touch
        } else {
            DeviceClass::Mouse
        }
    }

    fn client_sample(&self) -> Option<Sample> {
        self.dyn_ref::<MouseEvent>()
            .map(|e| Sample::new(e.client_x() as f64, e.client_y() as f64))
    }

    fn changed_contacts(&self) -> Vec<Contact> {
        let Some(event) = self.dyn_ref::<TouchEvent>() else {
            return Vec::new();
        };
        let list = event.changed_touches();
        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .map(|t| Contact {
                id: t.identifier(),
                sample: Sample::new(t.client_x() as f64, t.client_y() as f64),
            })
            .collect()
    }

    fn suppress_default(&self) {
        self.prevent_default();
    }
}
