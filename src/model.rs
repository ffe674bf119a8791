//! Swipe pad state: the live trail of the current gesture plus user settings.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;
use yew_swipe::Sample;

pub const SETTINGS_KEY: &str = "swipe_settings";
pub const MIN_TRAIL: usize = 2;
pub const MAX_TRAIL: usize = 512;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_trail: bool,
    /// Samples kept for the current gesture; oldest are dropped first.
    pub trail_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_trail: true,
            trail_limit: 64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeSummary {
    pub start: Sample,
    pub end: Sample,
    pub samples: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PadState {
    pub settings: Settings,
    pub trail: VecDeque<Sample>,
    pub active: bool,
    pub start: Option<Sample>,
    pub moves: usize,
    pub swipes: u32,
    pub last: Option<SwipeSummary>,
}

impl PadState {
    fn push(&mut self, s: Sample) {
        self.trail.push_back(s);
        let cap = self.settings.trail_limit.clamp(MIN_TRAIL, MAX_TRAIL);
        while self.trail.len() > cap {
            self.trail.pop_front();
        }
    }
}

pub enum PadAction {
    Begin(Sample),
    Extend(Sample),
    Finish(Sample),
    ToggleTrail,
    SetTrailLimit(usize),
    LoadSettings(Settings),
    Clear,
}

impl Reducible for PadState {
    type Action = PadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PadAction::*;
        let mut new = (*self).clone();
        match action {
            Begin(s) => {
                new.trail.clear();
                new.trail.push_back(s);
                new.active = true;
                new.start = Some(s);
                new.moves = 0;
            }
            Extend(s) => {
                if !new.active { return self; }
                new.moves += 1;
                new.push(s);
            }
            Finish(s) => {
                if !new.active { return self; }
                new.push(s);
                new.active = false;
                new.swipes = new.swipes.saturating_add(1);
                new.last = new.start.take().map(|start| SwipeSummary { start, end: s, samples: new.moves + 2 });
            }
            ToggleTrail => { new.settings.show_trail = !new.settings.show_trail; }
            SetTrailLimit(n) => {
                new.settings.trail_limit = n.clamp(MIN_TRAIL, MAX_TRAIL);
                let cap = new.settings.trail_limit;
                while new.trail.len() > cap { new.trail.pop_front(); }
            }
            LoadSettings(settings) => { new.settings = settings; }
            Clear => {
                new.trail.clear();
                new.active = false;
                new.start = None;
                new.moves = 0;
                new.swipes = 0;
                new.last = None;
            }
        }
        Rc::new(new)
    }
}
