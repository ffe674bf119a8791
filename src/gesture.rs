//! Unified mouse/touch swipe gestures.
//!
//! A [`Swipe`] is attached to a pointer-down style event. Each start opens a
//! [`Session`] that listens for the matching move/up events at window scope,
//! hands normalized [`Sample`]s to the caller's [`Handlers`] and removes its
//! listeners exactly once when the gesture ends.
use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{DeviceClass, EventRegistry, Host, PointerEvent, Sample};
use crate::throttle::FrameLimiter;

pub const MOUSE_MOVE: &str = "mousemove";
pub const MOUSE_UP: &str = "mouseup";
pub const TOUCH_MOVE: &str = "touchmove";
pub const TOUCH_END: &str = "touchend";

/// Input device of a session, fixed at start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Mouse,
    /// Only the touch point with `contact_id` belongs to the session.
    Touch { contact_id: i32 },
}

impl Device {
    /// Picks the device for a start event along with its start sample. A touch
    /// start with no changed touch points yields `None`.
    pub fn classify<E: PointerEvent + ?Sized>(event: &E) -> Option<(Device, Sample)> {
        match event.device_class() {
            DeviceClass::Mouse => event.client_sample().map(|s| (Device::Mouse, s)),
            DeviceClass::Touch => event.changed_contacts().first().map(|c| {
                (
                    Device::Touch {
                        contact_id: c.id,
                    },
                    c.sample,
                )
            }),
        }
    }

    pub fn move_event(self) -> &'static str {
        match self {
            Device::Mouse => MOUSE_MOVE,
            Device::Touch { .. } => TOUCH_MOVE,
        }
    }

    pub fn up_event(self) -> &'static str {
        match self {
            Device::Mouse => MOUSE_UP,
            Device::Touch { .. } => TOUCH_END,
        }
    }

    /// Sample for this session's contact, or `None` if the event is about
    /// some other contact.
    pub fn sample<E: PointerEvent + ?Sized>(self, event: &E) -> Option<Sample> {
        match self {
            Device::Mouse => event.client_sample(),
            Device::Touch { contact_id } => event
                .changed_contacts()
                .into_iter()
                .find(|c| c.id == contact_id)
                .map(|c| c.sample),
        }
    }
}

/// Handlers returned by the caller when a gesture starts.
pub struct Handlers<E: ?Sized> {
    on_move: Box<dyn FnMut(Sample, &E)>,
    on_up: Option<Box<dyn FnOnce(Sample, &E)>>,
}

impl<E: ?Sized> Handlers<E> {
    pub fn new(
        on_move: impl FnMut(Sample, &E) + 'static,
        on_up: impl FnOnce(Sample, &E) + 'static,
    ) -> Self {
        Self {
            on_move: Box::new(on_move),
            on_up: Some(Box::new(on_up)),
        }
    }
}

struct Subscriptions<L> {
    on_move: L,
    on_up: L,
}

/// Live binding between one start event and its move/up listeners.
pub struct Session<H: Host> {
    host: Rc<H>,
    device: Device,
    handlers: Handlers<H::Event>,
    limiter: FrameLimiter<H>,
    subscriptions: Option<Subscriptions<H::Listener>>,
}

impl<H: Host + 'static> Session<H> {
    fn open(host: Rc<H>, device: Device, handlers: Handlers<H::Event>) -> Rc<RefCell<Self>> {
        let session = Rc::new(RefCell::new(Session {
            host: host.clone(),
            device,
            handlers,
            limiter: FrameLimiter::new(host.clone()),
            subscriptions: None,
        }));
        let subscriptions = subscribe(&*host, device, &session);
        session.borrow_mut().subscriptions = Some(subscriptions);
        session
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn is_open(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Removes both listeners. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if let Some(subscriptions) = self.subscriptions.take() {
            unsubscribe(&*self.host, subscriptions);
        }
    }

    fn on_move(&mut self, event: &H::Event) {
        if !self.is_open() {
            return;
        }
        let Some(sample) = self.device.sample(event) else {
            return;
        };
        if !self.limiter.admit() {
            return;
        }
        (self.handlers.on_move)(sample, event);
    }

    fn on_up(&mut self, event: &H::Event) {
        if !self.is_open() {
            return;
        }
        let Some(sample) = self.device.sample(event) else {
            return;
        };
        self.teardown();
        if let Some(on_up) = self.handlers.on_up.take() {
            on_up(sample, event);
        }
    }
}

fn subscribe<H: Host + 'static>(
    host: &H,
    device: Device,
    session: &Rc<RefCell<Session<H>>>,
) -> Subscriptions<H::Listener> {
    let on_move = {
        let session = session.clone();
        host.listen(
            device.move_event(),
            true,
            Box::new(move |event: &H::Event| {
                // re-entrant deliveries are dropped
                if let Ok(mut session) = session.try_borrow_mut() {
                    session.on_move(event);
                }
            }),
        )
    };
    let on_up = {
        let session = session.clone();
        host.listen(
            device.up_event(),
            true,
            Box::new(move |event: &H::Event| {
                if let Ok(mut session) = session.try_borrow_mut() {
                    session.on_up(event);
                }
            }),
        )
    };
    Subscriptions { on_move, on_up }
}

fn unsubscribe<R: EventRegistry + ?Sized>(host: &R, subscriptions: Subscriptions<R::Listener>) {
    host.unlisten(subscriptions.on_move);
    host.unlisten(subscriptions.on_up);
}

type StartFn<E> = dyn FnMut(Sample, &E) -> Handlers<E>;

/// Turns pointer-down events into swipe sessions.
pub struct Swipe<H: Host> {
    host: Rc<H>,
    on_start: RefCell<Box<StartFn<H::Event>>>,
}

impl<H: Host + 'static> Swipe<H> {
    pub fn new(
        host: Rc<H>,
        on_start: impl FnMut(Sample, &H::Event) -> Handlers<H::Event> + 'static,
    ) -> Self {
        Self {
            host,
            on_start: RefCell::new(Box::new(on_start)),
        }
    }

    /// Entry point for a native mouse-down or touch-start event.
    pub fn start(&self, event: &H::Event) {
        self.open(event);
    }

    fn open(&self, event: &H::Event) -> Option<Rc<RefCell<Session<H>>>> {
        let (device, sample) = Device::classify(event)?;
        if device == Device::Mouse {
            // keeps the browser from starting a text selection or native drag
            event.suppress_default();
        }
        let handlers = {
            let mut on_start = self.on_start.try_borrow_mut().ok()?;
            (*on_start)(sample, event)
        };
        Some(Session::open(self.host.clone(), device, handlers))
    }
}

/// Builds a native start-event handler from `on_start`.
pub fn create_handler<H, F>(host: Rc<H>, on_start: F) -> impl Fn(&H::Event)
where
    H: Host + 'static,
    F: FnMut(Sample, &H::Event) -> Handlers<H::Event> + 'static,
{
    let swipe = Swipe::new(host, on_start);
    move |event: &H::Event| swipe.start(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockEvent, MockHost};
    use std::cell::Cell;

    #[derive(Default)]
    struct Log {
        starts: Vec<Sample>,
        moves: Vec<Sample>,
        ups: Vec<Sample>,
    }

    fn recording_swipe(host: &Rc<MockHost>) -> (Swipe<MockHost>, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let swipe = {
            let log = log.clone();
            Swipe::new(host.clone(), move |sample, _event: &MockEvent| {
                log.borrow_mut().starts.push(sample);
                let moves = log.clone();
                let ups = log.clone();
                Handlers::new(
                    move |s, _e: &MockEvent| moves.borrow_mut().moves.push(s),
                    move |s, _e: &MockEvent| ups.borrow_mut().ups.push(s),
                )
            })
        };
        (swipe, log)
    }

    #[test]
    fn classify_mouse_and_touch() {
        assert_eq!(
            Device::classify(&MockEvent::mouse(3.0, 4.0)),
            Some((Device::Mouse, Sample::new(3.0, 4.0)))
        );
        assert_eq!(
            Device::classify(&MockEvent::touch(&[(7, 1.0, 2.0), (8, 5.0, 5.0)])),
            Some((Device::Touch { contact_id: 7 }, Sample::new(1.0, 2.0)))
        );
        assert_eq!(Device::classify(&MockEvent::touch(&[])), None);
    }

    #[test]
    fn touch_sample_filters_by_contact() {
        let device = Device::Touch { contact_id: 2 };
        assert_eq!(device.sample(&MockEvent::touch(&[(1, 9.0, 9.0)])), None);
        assert_eq!(
            device.sample(&MockEvent::touch(&[(1, 9.0, 9.0), (2, 4.0, 6.0)])),
            Some(Sample::new(4.0, 6.0))
        );
    }

    #[test]
    fn mouse_start_subscribes_passive_window_listeners() {
        let host = MockHost::new();
        let (swipe, log) = recording_swipe(&host);
        let down = MockEvent::mouse(10.0, 20.0);
        swipe.start(&down);
        assert!(down.default_prevented());
        assert_eq!(log.borrow().starts, vec![Sample::new(10.0, 20.0)]);
        assert_eq!(host.listener_count(MOUSE_MOVE), 1);
        assert_eq!(host.listener_count(MOUSE_UP), 1);
        assert_eq!(host.is_passive(MOUSE_MOVE), Some(true));
        assert_eq!(host.is_passive(MOUSE_UP), Some(true));
        assert_eq!(host.listener_count(TOUCH_MOVE), 0);
    }

    #[test]
    fn touch_start_keeps_default_action() {
        let host = MockHost::new();
        let (swipe, _log) = recording_swipe(&host);
        let start = MockEvent::touch(&[(1, 0.0, 0.0)]);
        swipe.start(&start);
        assert!(!start.default_prevented());
        assert_eq!(host.listener_count(TOUCH_MOVE), 1);
        assert_eq!(host.listener_count(TOUCH_END), 1);
    }

    #[test]
    fn touch_start_without_contacts_opens_nothing() {
        let host = MockHost::new();
        let (swipe, log) = recording_swipe(&host);
        swipe.start(&MockEvent::touch(&[]));
        assert!(log.borrow().starts.is_empty());
        assert_eq!(host.total_listeners(), 0);
    }

    #[test]
    fn teardown_is_idempotent() {
        let host = MockHost::new();
        let (swipe, _log) = recording_swipe(&host);
        let session = swipe.open(&MockEvent::mouse(0.0, 0.0)).unwrap();
        assert!(session.borrow().is_open());
        session.borrow_mut().teardown();
        session.borrow_mut().teardown();
        session.borrow_mut().teardown();
        assert!(!session.borrow().is_open());
        assert_eq!(host.total_listeners(), 0);
        assert_eq!(host.removals(), 2);
    }

    #[test]
    fn up_removes_listeners_before_handler_runs() {
        let host = MockHost::new();
        let seen_listeners = Rc::new(Cell::new(usize::MAX));
        let swipe = {
            let host_in = host.clone();
            let seen = seen_listeners.clone();
            Swipe::new(host.clone(), move |_, _e: &MockEvent| {
                let host_in = host_in.clone();
                let seen = seen.clone();
                Handlers::new(
                    |_, _e: &MockEvent| {},
                    move |_, _e: &MockEvent| seen.set(host_in.total_listeners()),
                )
            })
        };
        swipe.start(&MockEvent::mouse(0.0, 0.0));
        host.dispatch(MOUSE_UP, &MockEvent::mouse(1.0, 1.0));
        assert_eq!(seen_listeners.get(), 0);
    }

    #[test]
    fn up_delivered_once_even_if_dispatched_twice() {
        let host = MockHost::new();
        let (swipe, log) = recording_swipe(&host);
        swipe.start(&MockEvent::mouse(0.0, 0.0));
        host.dispatch(MOUSE_UP, &MockEvent::mouse(1.0, 1.0));
        host.dispatch(MOUSE_UP, &MockEvent::mouse(2.0, 2.0));
        assert_eq!(log.borrow().ups, vec![Sample::new(1.0, 1.0)]);
    }

    #[test]
    fn moves_are_limited_per_frame() {
        let host = MockHost::new();
        let (swipe, log) = recording_swipe(&host);
        swipe.start(&MockEvent::mouse(0.0, 0.0));
        for i in 0..5 {
            host.dispatch(MOUSE_MOVE, &MockEvent::mouse(f64::from(i), 0.0));
        }
        assert_eq!(log.borrow().moves, vec![Sample::new(0.0, 0.0)]);
        for i in 0..4 {
            host.advance_frame();
            host.dispatch(MOUSE_MOVE, &MockEvent::mouse(f64::from(i), 1.0));
        }
        assert_eq!(log.borrow().moves.len(), 5);
    }

    #[test]
    fn foreign_touches_do_not_use_the_frame_slot() {
        let host = MockHost::new();
        let (swipe, log) = recording_swipe(&host);
        swipe.start(&MockEvent::touch(&[(1, 0.0, 0.0)]));
        host.dispatch(TOUCH_MOVE, &MockEvent::touch(&[(2, 50.0, 50.0)]));
        host.dispatch(TOUCH_MOVE, &MockEvent::touch(&[(1, 3.0, 4.0)]));
        assert_eq!(log.borrow().moves, vec![Sample::new(3.0, 4.0)]);
    }

    #[test]
    fn create_handler_opens_independent_sessions() {
        let host = MockHost::new();
        let starts = Rc::new(Cell::new(0));
        let handler = {
            let starts = starts.clone();
            create_handler(host.clone(), move |_, _e: &MockEvent| {
                starts.set(starts.get() + 1);
                Handlers::new(|_, _e: &MockEvent| {}, |_, _e: &MockEvent| {})
            })
        };
        handler(&MockEvent::mouse(0.0, 0.0));
        host.dispatch(MOUSE_UP, &MockEvent::mouse(0.0, 0.0));
        handler(&MockEvent::mouse(5.0, 5.0));
        assert_eq!(starts.get(), 2);
        assert_eq!(host.total_listeners(), 2);
    }
}
