//! Pointer-up handling - turn a finished gesture into a click.
//!
//! A click is a release within `click_slop` of its press, and it lands at the
//! press location. What a click does depends on the interaction state:
//!
//! - Waiting, empty canvas: open the overlay there
//! - Waiting, on concepts: report them for the caller's selection policy
//! - Placing, inside the overlay: belongs to the text view, ignored
//! - Placing, elsewhere: abandon the placement (and report any concepts hit)

use tracing::debug;

use crate::canvas::CanvasController;
use crate::document::ConceptStore;
use crate::input::{EventOutcome, InteractionState, PointerEvent};
use crate::profile_scope;

impl CanvasController {
    pub fn handle_pointer_up<S: ConceptStore>(
        &mut self,
        event: &PointerEvent,
        store: &mut S,
    ) -> EventOutcome {
        profile_scope!("handle_pointer_up");

        let Some(mut press) = self.press.take() else {
            return EventOutcome::Ignored;
        };
        if event.position.is_finite() {
            press.track(event.position);
        }
        if !press.is_click(self.config.click_slop) {
            debug!(travel = press.max_travel, "Drag gesture, ignored");
            return EventOutcome::Ignored;
        }

        let point = press.origin;
        let shift = press.modifiers.shift;

        match self.state {
            InteractionState::Waiting => match self.clicked_concepts(point, store) {
                None => self.start_new_concept(point),
                Some(hits) => {
                    debug!(hits = hits.len(), shift, "Clicked existing concepts");
                    EventOutcome::ConceptsClicked {
                        ids: hits.iter().map(|c| c.id()).collect(),
                        shift,
                    }
                }
            },
            InteractionState::PlacingNewConcept { .. } => {
                if self.overlay.hit(point) {
                    return EventOutcome::Ignored;
                }

                self.end_placement();
                match self.clicked_concepts(point, store) {
                    None => {
                        debug!("Clicked away from overlay, placement cancelled");
                        EventOutcome::Cancelled
                    }
                    Some(hits) => {
                        debug!(hits = hits.len(), "Placement cancelled by concept click");
                        EventOutcome::ConceptsClicked {
                            ids: hits.iter().map(|c| c.id()).collect(),
                            shift,
                        }
                    }
                }
            }
        }
    }
}
