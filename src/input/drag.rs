//! Pointer-drag handling.
//!
//! Dragging has no behavior of its own here (moving concepts is not part of
//! this core). Drags only widen the press's travel so a wandering gesture
//! does not count as a click.

use crate::canvas::CanvasController;
use crate::input::{EventOutcome, PointerEvent};

impl CanvasController {
    pub fn handle_pointer_drag(&mut self, event: &PointerEvent) -> EventOutcome {
        let Some(press) = self.press.as_mut() else {
            return EventOutcome::Ignored;
        };
        if event.position.is_finite() {
            press.track(event.position);
        }
        EventOutcome::Tracking
    }
}
