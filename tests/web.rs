#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Event, MouseEvent, MouseEventInit};
use yew_swipe::{DeviceClass, Handlers, PointerEvent, Sample, WebHost, create_handler};

wasm_bindgen_test_configure!(run_in_browser);

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_cancelable(true);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
fn mouse_event_is_read_as_mouse() {
    let down = mouse("mousedown", 4, 9);
    let event: &Event = &down;
    assert_eq!(event.device_class(), DeviceClass::Mouse);
    assert_eq!(event.client_sample(), Some(Sample::new(4.0, 9.0)));
    assert!(event.changed_contacts().is_empty());
}

#[wasm_bindgen_test]
fn window_listeners_are_removed_on_mouseup() {
    let host = WebHost::from_global().unwrap();
    let window = web_sys::window().unwrap();
    let ups = Rc::new(RefCell::new(Vec::new()));
    let on_down = {
        let ups = ups.clone();
        create_handler(host, move |_start, _e: &Event| {
            let ups = ups.clone();
            Handlers::new(|_, _e: &Event| {}, move |s, _e: &Event| ups.borrow_mut().push(s))
        })
    };

    let down = mouse("mousedown", 1, 1);
    let event: &Event = &down;
    on_down(event);
    assert!(event.default_prevented());

    window.dispatch_event(&mouse("mouseup", 6, 7)).unwrap();
    window.dispatch_event(&mouse("mouseup", 8, 8)).unwrap();
    assert_eq!(*ups.borrow(), vec![Sample::new(6.0, 7.0)]);
}
