//! Input events the canvas consumes and the outcomes it reports.

use crate::concept::{Concept, ConceptId};
use crate::types::{CanvasPoint, Modifiers};

/// A pointer event in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: CanvasPoint,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: impl Into<CanvasPoint>) -> Self {
        Self {
            position: position.into(),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// Logical key commands, independent of the physical key that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Finish the current edit (Enter)
    Commit,
    /// Abandon the current edit (Escape)
    Cancel,
}

impl KeyCommand {
    /// Map a host key or editing-selector name to a command.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Enter" | "Return" | "enter" | "return" | "insertNewline" => Some(Self::Commit),
            "Escape" | "escape" | "cancelOperation" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Text typed into the overlay while it is editable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextInput {
    Insert(String),
    DeleteBackward,
}

/// Everything the canvas can be fed.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    PointerDown(PointerEvent),
    PointerDrag(PointerEvent),
    PointerUp(PointerEvent),
    Key(KeyCommand),
    Text(TextInput),
}

/// What handling an event did.
#[derive(Clone, Debug, PartialEq)]
pub enum EventOutcome {
    /// Not meaningful in the current state; nothing changed
    Ignored,
    /// A pointer gesture is in progress
    Tracking,
    /// The overlay is open at `point` for naming a new concept
    PlacementStarted { point: CanvasPoint },
    /// A click landed on existing concepts; selection is up to the caller
    ConceptsClicked { ids: Vec<ConceptId>, shift: bool },
    /// The pending edit became a concept in the store
    Committed(Concept),
    /// The pending edit was empty and was dropped
    Discarded,
    /// The pending edit was abandoned
    Cancelled,
    /// Overlay content changed
    TextEdited,
}

impl EventOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    pub fn committed(&self) -> Option<&Concept> {
        match self {
            Self::Committed(concept) => Some(concept),
            _ => None,
        }
    }
}
