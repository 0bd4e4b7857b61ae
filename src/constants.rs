//! Canvas-wide constants.
//!
//! Centralizes sizing and gesture values so the interaction code stays
//! free of magic numbers. Everything here is a default; `CanvasConfig`
//! can override the values that are user-tunable.

// ============================================================================
// Concept Sizing
// ============================================================================

/// Default font size used to measure a concept label when it carries no style
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Average glyph width as a fraction of the font size
pub const CHAR_WIDTH_RATIO: f32 = 0.6;

/// Line height as a fraction of the font size
pub const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Padding added on every side of the measured label
pub const CONCEPT_PADDING: f32 = 8.0;

/// Smallest bounding region a concept may have
pub const MIN_CONCEPT_SIZE: (f32, f32) = (60.0, 30.0);

// ============================================================================
// Text-Edit Overlay
// ============================================================================

/// Size of the overlay frame while it is shown
pub const OVERLAY_SIZE: (f32, f32) = (120.0, 32.0);

/// Where the overlay frame is parked after dismissal (far off the visible canvas)
pub const OVERLAY_PARKED_CENTER: (f32, f32) = (-10_000.0, -10_000.0);

// ============================================================================
// Gestures
// ============================================================================

/// Maximum pointer travel (canvas units) between down and up that still counts as a click
pub const CLICK_SLOP: f32 = 5.0;

// ============================================================================
// Logging
// ============================================================================

/// Filter used by `logging::init_logging` when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "ideaboard=info";
