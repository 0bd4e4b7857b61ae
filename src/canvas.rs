//! Canvas controller - the interaction core.
//!
//! Owns the interaction state, the text-edit overlay and the pointer gesture
//! tracker. The concept store belongs to the document and is lent to each
//! call, so a transition has exclusive access to it until it returns.
//!
//! Event handlers live in the `input` module, split by gesture phase.

use tracing::debug;

use crate::concept::{Concept, RichText};
use crate::config::CanvasConfig;
use crate::document::ConceptStore;
use crate::error::CanvasResult;
use crate::input::{CanvasEvent, EventOutcome, InteractionState, PointerPress};
use crate::overlay::TextEditOverlay;
use crate::types::CanvasPoint;

pub struct CanvasController {
    pub(crate) state: InteractionState,
    pub(crate) overlay: TextEditOverlay,
    pub(crate) press: Option<PointerPress>,
    pub(crate) config: CanvasConfig,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasController {
    /// Build a controller from a config that is known to be valid.
    pub fn new(config: CanvasConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid canvas config");
        Self {
            state: InteractionState::Waiting,
            overlay: TextEditOverlay::new(config.overlay_size),
            press: None,
            config,
        }
    }

    /// Build a controller, rejecting out-of-range config values.
    pub fn try_new(config: CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn overlay(&self) -> &TextEditOverlay {
        &self.overlay
    }

    /// Replace the overlay content with the host text view's buffer.
    ///
    /// Only the text can be changed from outside; showing and dismissing
    /// the overlay stays with the state machine. Returns false when no
    /// placement is in progress.
    pub fn set_overlay_text(&mut self, text: impl Into<RichText>) -> bool {
        self.state.is_placing() && self.overlay.set_text(text)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Feed one event through the state machine.
    ///
    /// Every state accepts every event; combinations that mean nothing in the
    /// current state return [`EventOutcome::Ignored`].
    pub fn handle_event<S: ConceptStore>(
        &mut self,
        event: CanvasEvent,
        store: &mut S,
    ) -> EventOutcome {
        match event {
            CanvasEvent::PointerDown(e) => self.handle_pointer_down(&e),
            CanvasEvent::PointerDrag(e) => self.handle_pointer_drag(&e),
            CanvasEvent::PointerUp(e) => self.handle_pointer_up(&e, store),
            CanvasEvent::Key(command) => self.handle_key(command, store),
            CanvasEvent::Text(input) => self.handle_text(input),
        }
    }

    /// Open the overlay at `point` and wait for a name.
    ///
    /// Starting while a placement is pending moves it; the old pending text
    /// is dropped, not committed.
    pub fn start_new_concept(&mut self, point: CanvasPoint) -> EventOutcome {
        self.overlay.show(point);
        self.state.start_placing(point);
        debug!(x = point.x, y = point.y, "Placing new concept");
        EventOutcome::PlacementStarted { point }
    }

    /// Create a concept from `text` at `point` and append it to `store`.
    ///
    /// Empty text creates nothing and leaves the store untouched.
    pub fn save_concept<S: ConceptStore>(
        &self,
        text: impl Into<RichText>,
        point: CanvasPoint,
        store: &mut S,
    ) -> Option<Concept> {
        let Some(concept) = Concept::with_policy(text, point, &self.config.sizing) else {
            debug!(x = point.x, y = point.y, "Empty text, nothing saved");
            return None;
        };
        let stored = store.add(concept);
        debug!(id = %stored.id(), "Concept saved");
        Some(stored.clone())
    }

    /// Concepts under `point`, or `None` when nothing is there.
    pub fn clicked_concepts<S: ConceptStore>(
        &self,
        point: CanvasPoint,
        store: &S,
    ) -> Option<Vec<Concept>> {
        let hits = store.concepts_at(point);
        if hits.is_empty() { None } else { Some(hits) }
    }

    /// Close the overlay and return to Waiting. Used on every exit from a
    /// placement, successful or not.
    pub(crate) fn end_placement(&mut self) {
        self.overlay.dismiss();
        self.state.reset();
    }
}
