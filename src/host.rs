//! Seams between the gesture core and the host platform.
//!
//! The browser implementation lives in [`crate::web`]; tests drive the core
//! through [`crate::testing::MockHost`].

/// Normalized pointer coordinates handed to gesture handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    pub client_x: f64,
    pub client_y: f64,
}

impl Sample {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// One touch point carried by a native touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub sample: Sample,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mouse,
    Touch,
}

/// Accessors the core needs from a native input event.
pub trait PointerEvent {
    fn device_class(&self) -> DeviceClass;
    /// Client coordinates of a mouse event; `None` when the event carries none.
    fn client_sample(&self) -> Option<Sample>;
    /// Touch points that changed in this event, in host order.
    fn changed_contacts(&self) -> Vec<Contact>;
    fn suppress_default(&self);
}

/// Window-scope event subscription registry.
pub trait EventRegistry {
    type Event: PointerEvent;
    type Listener;

    /// `passive` promises the handler never blocks default handling.
    fn listen(
        &self,
        name: &'static str,
        passive: bool,
        handler: Box<dyn FnMut(&Self::Event)>,
    ) -> Self::Listener;

    fn unlisten(&self, listener: Self::Listener);
}

/// "Run this once before the next frame is drawn."
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

pub trait Host: EventRegistry + FrameScheduler {}

impl<T: EventRegistry + FrameScheduler> Host for T {}
