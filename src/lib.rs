//! Mouse and touch input normalized into one swipe gesture protocol.
//!
//! ```ignore
//! let on_start = create_handler(host, |start, _event| {
//!     Handlers::new(|sample, _event| { /* move */ }, |sample, _event| { /* up */ })
//! });
//! ```

pub mod gesture;
pub mod host;
pub mod surface;
pub mod throttle;
pub mod web;

#[doc(hidden)]
pub mod testing;

pub use gesture::{Device, Handlers, Session, Swipe, create_handler};
pub use host::{Contact, DeviceClass, EventRegistry, FrameScheduler, Host, PointerEvent, Sample};
pub use surface::{SwipeSurface, SwipeSurfaceProps};
pub use throttle::{FrameLimiter, LimiterState, limit};
pub use web::WebHost;
