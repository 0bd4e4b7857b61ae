//! Pointer-down handling - start tracking a gesture.
//!
//! Nothing is decided on press. Whether the gesture becomes a click is only
//! known on release.

use tracing::trace;

use crate::canvas::CanvasController;
use crate::input::{EventOutcome, PointerEvent, PointerPress};

impl CanvasController {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> EventOutcome {
        if !event.position.is_finite() {
            return EventOutcome::Ignored;
        }

        // A press without a release (focus loss, etc.) is simply superseded
        if self.press.replace(PointerPress::new(event.position, event.modifiers)).is_some() {
            trace!("Previous press had no release, dropped");
        }
        EventOutcome::Tracking
    }
}
