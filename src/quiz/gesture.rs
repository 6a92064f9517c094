//! Swipe gesture interpretation for a single card.
//!
//! A card starts `Idle`. Pressing the pointer on it starts `Dragging`;
//! moving updates the offset, tilt and lean; releasing past the commit
//! threshold ends in `Committed`, otherwise the card snaps back to `Idle`.
//! `Committed` is terminal: the interpreter refuses any further input.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::card::Direction;
use super::error::InputError;

/// Distances (in pointer pixels) that drive gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal travel beyond which a release commits.
    pub commit_threshold: f32,
    /// Horizontal travel beyond which the card shows a lean.
    pub lean_threshold: f32,
    /// Degrees of tilt are `dx / rotation_divisor`.
    pub rotation_divisor: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 120.0,
            lean_threshold: 30.0,
            rotation_divisor: 15.0,
        }
    }
}

/// A pointer position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// How the card is drawn while being handled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Visual {
    /// Horizontal displacement from rest.
    pub offset_x: f32,
    /// Vertical displacement from rest.
    pub offset_y: f32,
    /// Tilt in degrees, positive clockwise.
    pub rotation: f32,
    /// Side the card leans toward once past the lean threshold.
    pub lean: Option<Direction>,
}

/// Gesture lifecycle of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// Waiting for a pointer press.
    Idle,
    /// Pointer is down and tracking.
    Dragging {
        /// Where the press started.
        origin: Point,
    },
    /// The card has been answered.
    Committed(Direction),
}

/// What a single input did to the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Input had no effect (no active drag, or a second press).
    Ignored,
    /// A drag started.
    Started,
    /// The card moved.
    Moved(Visual),
    /// A short drag was released and the card returned to rest.
    SnappedBack,
    /// The card was answered.
    Committed(Direction),
}

/// Interprets pointer and button input for one card.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    config: GestureConfig,
    phase: GesturePhase,
    visual: Visual,
}

impl GestureInterpreter {
    /// Creates an idle interpreter.
    #[instrument]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            visual: Visual::default(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Current visual state.
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Returns true while a drag is being tracked.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// The committed direction, once answered.
    pub fn committed(&self) -> Option<Direction> {
        match self.phase {
            GesturePhase::Committed(direction) => Some(direction),
            _ => None,
        }
    }

    fn ensure_open(&self) -> Result<(), InputError> {
        match self.phase {
            GesturePhase::Committed(direction) => {
                warn!(%direction, "Input on committed card");
                Err(InputError::AlreadyCommitted(direction))
            }
            _ => Ok(()),
        }
    }

    /// Starts tracking a drag at `point`. A second press during a drag is ignored.
    #[instrument(skip(self))]
    pub fn pointer_down(&mut self, point: Point) -> Result<GestureEvent, InputError> {
        self.ensure_open()?;
        if self.is_active() {
            return Ok(GestureEvent::Ignored);
        }
        self.phase = GesturePhase::Dragging { origin: point };
        self.visual = Visual::default();
        debug!("Drag started");
        Ok(GestureEvent::Started)
    }

    /// Updates offset, tilt and lean. No-op without an active drag.
    #[instrument(skip(self))]
    pub fn pointer_move(&mut self, point: Point) -> Result<GestureEvent, InputError> {
        self.ensure_open()?;
        let GesturePhase::Dragging { origin } = self.phase else {
            return Ok(GestureEvent::Ignored);
        };
        let dx = point.x - origin.x;
        let dy = point.y - origin.y;
        self.visual = Visual {
            offset_x: dx,
            offset_y: dy,
            rotation: dx / self.config.rotation_divisor,
            lean: self.lean(dx),
        };
        Ok(GestureEvent::Moved(self.visual))
    }

    /// Ends the drag: commits past the threshold, otherwise snaps back.
    /// No-op without an active drag.
    #[instrument(skip(self))]
    pub fn pointer_up(&mut self) -> Result<GestureEvent, InputError> {
        self.ensure_open()?;
        if !self.is_active() {
            return Ok(GestureEvent::Ignored);
        }
        match self.classify(self.visual.offset_x) {
            Some(direction) => {
                debug!(%direction, dx = self.visual.offset_x, "Drag committed");
                self.phase = GesturePhase::Committed(direction);
                Ok(GestureEvent::Committed(direction))
            }
            None => {
                debug!(dx = self.visual.offset_x, "Drag snapped back");
                self.phase = GesturePhase::Idle;
                self.visual = Visual::default();
                Ok(GestureEvent::SnappedBack)
            }
        }
    }

    /// Commits without a drag (button press). Discards any drag in progress.
    #[instrument(skip(self))]
    pub fn commit(&mut self, direction: Direction) -> Result<GestureEvent, InputError> {
        self.ensure_open()?;
        debug!(%direction, "Button committed");
        self.phase = GesturePhase::Committed(direction);
        self.visual.lean = Some(direction);
        Ok(GestureEvent::Committed(direction))
    }

    /// Direction a release at horizontal offset `dx` commits to, if any.
    pub fn classify(&self, dx: f32) -> Option<Direction> {
        if dx > self.config.commit_threshold {
            Some(Direction::Right)
        } else if dx < -self.config.commit_threshold {
            Some(Direction::Left)
        } else {
            None
        }
    }

    fn lean(&self, dx: f32) -> Option<Direction> {
        if dx > self.config.lean_threshold {
            Some(Direction::Right)
        } else if dx < -self.config.lean_threshold {
            Some(Direction::Left)
        } else {
            None
        }
    }
}
