// Leading-edge, once-per-frame throttling.
use std::cell::Cell;
use std::rc::Rc;

use crate::host::FrameScheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimiterState {
    /// Next call runs immediately.
    Armed,
    /// A call already ran this frame; further calls are dropped.
    CoolingDown,
}

/// Admits at most one call per rendering frame. Dropped calls are never
/// replayed.
pub struct FrameLimiter<S: FrameScheduler + ?Sized> {
    scheduler: Rc<S>,
    state: Rc<Cell<LimiterState>>,
}

impl<S: FrameScheduler + ?Sized> FrameLimiter<S> {
    pub fn new(scheduler: Rc<S>) -> Self {
        Self {
            scheduler,
            state: Rc::new(Cell::new(LimiterState::Armed)),
        }
    }

    pub fn state(&self) -> LimiterState {
        self.state.get()
    }

    /// Returns true when the caller may run now. Re-arms at the next frame.
    pub fn admit(&self) -> bool {
        match self.state.get() {
            LimiterState::CoolingDown => false,
            LimiterState::Armed => {
                self.state.set(LimiterState::CoolingDown);
                let state = Rc::downgrade(&self.state);
                self.scheduler.request_frame(Box::new(move || {
                    if let Some(state) = state.upgrade() {
                        state.set(LimiterState::Armed);
                    }
                }));
                true
            }
        }
    }
}

/// Wraps `callback` so it runs at most once per frame.
pub fn limit<S, A, F>(scheduler: Rc<S>, mut callback: F) -> impl FnMut(A)
where
    S: FrameScheduler + ?Sized,
    F: FnMut(A),
{
    let limiter = FrameLimiter::new(scheduler);
    move |args: A| {
        if limiter.admit() {
            callback(args);
        }
    }
}
