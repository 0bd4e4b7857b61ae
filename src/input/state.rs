//! Interaction state machine.
//!
//! One tagged value says what the user is doing, so illegal combinations
//! (an edit point without an edit, two edits at once) cannot be expressed.
//!
//! ## State Transitions
//!
//! ```text
//! Waiting -> PlacingNewConcept   (click on empty canvas)
//! PlacingNewConcept -> Waiting   (commit, cancel, or click elsewhere)
//! ```
//!
//! Pointer gestures are tracked separately in [`PointerPress`]: a press is
//! not an interaction state, it only decides whether the matching release
//! is a click.

use crate::types::{CanvasPoint, Modifiers};

/// What the user is currently doing on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// Idle, no edit in progress
    #[default]
    Waiting,

    /// Naming a new concept that will be centered on `point`
    PlacingNewConcept {
        /// Canvas location the user clicked
        point: CanvasPoint,
    },
}

impl InteractionState {
    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    pub fn is_placing(&self) -> bool {
        matches!(self, Self::PlacingNewConcept { .. })
    }

    /// Where the pending concept will go, if one is being placed
    pub fn placement_point(&self) -> Option<CanvasPoint> {
        match self {
            Self::PlacingNewConcept { point } => Some(*point),
            Self::Waiting => None,
        }
    }

    /// Begin placing a concept at `point`. Replaces any pending placement.
    pub fn start_placing(&mut self, point: CanvasPoint) {
        *self = Self::PlacingNewConcept { point };
    }

    /// Back to Waiting
    pub fn reset(&mut self) {
        *self = Self::Waiting;
    }
}

/// An in-flight pointer gesture, from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPress {
    /// Where the pointer went down
    pub origin: CanvasPoint,
    /// Modifiers held at press time
    pub modifiers: Modifiers,
    /// Furthest the pointer has travelled from `origin` so far
    pub max_travel: f32,
}

impl PointerPress {
    pub fn new(origin: CanvasPoint, modifiers: Modifiers) -> Self {
        Self {
            origin,
            modifiers,
            max_travel: 0.0,
        }
    }

    /// Record a pointer position seen during the gesture.
    pub fn track(&mut self, point: CanvasPoint) {
        self.max_travel = self.max_travel.max(self.origin.distance_to(point));
    }

    /// True if the pointer never left the `slop` radius around the origin.
    pub fn is_click(&self, slop: f32) -> bool {
        self.max_travel <= slop
    }
}
