use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Animation speed multipliers offered by the diagram controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Half, Speed::Normal, Speed::Double];

    pub fn multiplier(self) -> f32 {
        match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Double => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Half => "0.5x",
            Self::Normal => "1x",
            Self::Double => "2x",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid speed '{0}': must be 0.5, 1 or 2")]
pub struct SpeedError(pub String);

impl FromStr for Speed {
    type Err = SpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches(['x', 'X']) {
            "0.5" | ".5" => Ok(Self::Half),
            "1" | "1.0" => Ok(Self::Normal),
            "2" | "2.0" => Ok(Self::Double),
            _ => Err(SpeedError(s.to_string())),
        }
    }
}

/// Entrance-clock value at which every one-shot entrance has finished.
pub const SETTLED_ENTRANCE: f32 = 10.0;

/// Identifies one hoverable element inside a diagram (a node, a site, a bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// Local playback state of one mounted diagram.
///
/// `time` is animation time: it advances at `speed` while playing and freezes while
/// paused, so every animation keyed on it scales its duration by `1 / multiplier`.
/// `entrance` drives the one-shot entrances. It also runs at `speed` but ignores
/// pause, so a paused diagram still finishes appearing.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramPlayback {
    playing: bool,
    speed: Speed,
    hovered: Option<ElementId>,
    time: f32,
    entrance: f32,
}

impl DiagramPlayback {
    pub fn new(reduced_motion: bool, speed: Speed) -> Self {
        Self {
            playing: !reduced_motion,
            speed,
            hovered: None,
            time: 0.0,
            entrance: if reduced_motion { SETTLED_ENTRANCE } else { 0.0 },
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle_playing(&mut self) {
        self.set_playing(!self.playing);
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn entrance(&self) -> f32 {
        self.entrance
    }

    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let step = dt * self.speed.multiplier();
        self.entrance = (self.entrance + step).min(SETTLED_ENTRANCE);
        if self.playing {
            self.time += step;
        }
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn hover(&mut self, id: ElementId) {
        self.hovered = Some(id);
    }

    /// Clear the active element, but only if `id` is still the one being hovered.
    pub fn leave(&mut self, id: ElementId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Update hover from this frame's pointer test. `hit` is the element under the
    /// pointer, if any.
    pub fn track_hover(&mut self, hit: Option<ElementId>) {
        match (hit, self.hovered) {
            (Some(id), _) => self.hover(id),
            (None, Some(prev)) => self.leave(prev),
            (None, None) => {}
        }
    }
}
