//! Key commands and overlay text input.

use tracing::debug;

use crate::canvas::CanvasController;
use crate::document::ConceptStore;
use crate::input::{EventOutcome, InteractionState, KeyCommand, TextInput};

impl CanvasController {
    pub fn handle_key<S: ConceptStore>(&mut self, command: KeyCommand, store: &mut S) -> EventOutcome {
        let InteractionState::PlacingNewConcept { point } = self.state else {
            return EventOutcome::Ignored;
        };

        match command {
            KeyCommand::Commit => {
                let text = self.overlay.current_text().clone();
                let saved = self.save_concept(text, point, store);
                // The overlay closes on both paths
                self.end_placement();
                match saved {
                    Some(concept) => EventOutcome::Committed(concept),
                    None => {
                        debug!("Commit with empty text, discarded");
                        EventOutcome::Discarded
                    }
                }
            }
            KeyCommand::Cancel => {
                self.end_placement();
                debug!("Placement cancelled");
                EventOutcome::Cancelled
            }
        }
    }

    pub fn handle_text(&mut self, input: TextInput) -> EventOutcome {
        if !self.state.is_placing() {
            return EventOutcome::Ignored;
        }

        let changed = match input {
            TextInput::Insert(text) => !text.is_empty() && self.overlay.insert_text(&text),
            TextInput::DeleteBackward => self.overlay.delete_backward(),
        };
        if changed { EventOutcome::TextEdited } else { EventOutcome::Ignored }
    }
}
