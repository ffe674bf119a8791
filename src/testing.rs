//! In-memory host used by unit and integration tests: synthetic events,
//! a listener table and a manually advanced frame clock.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::host::{Contact, DeviceClass, EventRegistry, FrameScheduler, PointerEvent, Sample};

#[derive(Debug)]
pub struct MockEvent {
    class: DeviceClass,
    point: Option<Sample>,
    contacts: Vec<Contact>,
    default_prevented: Cell<bool>,
}

impl MockEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            class: DeviceClass::Mouse,
            point: Some(Sample::new(x, y)),
            contacts: Vec::new(),
            default_prevented: Cell::new(false),
        }
    }

    /// Touch event whose changed touches are `(id, x, y)` in order.
    pub fn touch(changed: &[(i32, f64, f64)]) -> Self {
        Self {
            class: DeviceClass::Touch,
            point: None,
            contacts: changed
                .iter()
                .map(|&(id, x, y)| Contact {
                    id,
                    sample: Sample::new(x, y),
                })
                .collect(),
            default_prevented: Cell::new(false),
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl PointerEvent for MockEvent {
    fn device_class(&self) -> DeviceClass {
        self.class
    }

    fn client_sample(&self) -> Option<Sample> {
        self.point
    }

    fn changed_contacts(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn suppress_default(&self) {
        self.default_prevented.set(true);
    }
}

type Slot = Rc<RefCell<Box<dyn FnMut(&MockEvent)>>>;

struct Registered {
    id: u64,
    name: &'static str,
    passive: bool,
    handler: Slot,
}

#[derive(Debug)]
pub struct MockListener {
    id: u64,
}

#[derive(Default)]
pub struct MockHost {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Registered>>,
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    removed: Cell<usize>,
}

impl MockHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Delivers `event` to every listener registered under `name`. Listeners
    /// removed mid-dispatch are skipped.
    pub fn dispatch(&self, name: &str, event: &MockEvent) {
        let targets: Vec<(u64, Slot)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.name == name)
            .map(|l| (l.id, l.handler.clone()))
            .collect();
        for (id, slot) in targets {
            if !self.listeners.borrow().iter().any(|l| l.id == id) {
                continue;
            }
            if let Ok(mut handler) = slot.try_borrow_mut() {
                (*handler)(event);
            }
        }
    }

    /// Runs every frame callback requested so far.
    pub fn advance_frame(&self) {
        let due = std::mem::take(&mut *self.frames.borrow_mut());
        for callback in due {
            callback();
        }
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.name == name)
            .count()
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_passive(&self, name: &str) -> Option<bool> {
        self.listeners
            .borrow()
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.passive)
    }

    pub fn removals(&self) -> usize {
        self.removed.get()
    }
}

impl EventRegistry for MockHost {
    type Event = MockEvent;
    type Listener = MockListener;

    fn listen(
        &self,
        name: &'static str,
        passive: bool,
        handler: Box<dyn FnMut(&MockEvent)>,
    ) -> MockListener {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push(Registered {
            id,
            name,
            passive,
            handler: Rc::new(RefCell::new(handler)),
        });
        MockListener { id }
    }

    fn unlisten(&self, listener: MockListener) {
        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            let pos = listeners.iter().position(|l| l.id == listener.id);
            pos.map(|pos| listeners.remove(pos))
        };
        if removed.is_some() {
            self.removed.set(self.removed.get() + 1);
        }
    }
}

impl FrameScheduler for MockHost {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.frames.borrow_mut().push(callback);
    }
}
