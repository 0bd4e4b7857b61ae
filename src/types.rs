//! Core geometry types for the canvas.
//!
//! All coordinates are canvas-space: the logical drawing surface, independent
//! of any window or screen flipping the host applies.

use serde::{Deserialize, Serialize};

/// A point on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance_to(&self, other: CanvasPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for CanvasPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height of a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle stored center-first.
///
/// Keeping the center as the primary field means a frame built with
/// [`Rect::from_center`] always reports back the exact center it was given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: CanvasPoint,
    pub size: Size,
}

impl Rect {
    pub fn from_center(center: CanvasPoint, size: Size) -> Self {
        Self { center, size }
    }

    pub fn center(&self) -> CanvasPoint {
        self.center
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.center.x - self.size.width / 2.0
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.center.x + self.size.width / 2.0
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.center.y - self.size.height / 2.0
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.center.y + self.size.height / 2.0
    }

    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// Inclusive on all four edges: a point on the border is inside.
    #[inline]
    pub fn contains(&self, point: CanvasPoint) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }
}

/// Modifier keys held while a pointer event fired.
///
/// Carried through to callers for multi-select policy; the interaction core
/// does not branch on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };
}
