//! Ideaboard - the canvas interaction core of a mind-map editor.
//!
//! Turns pointer and key events on a drawing surface into new concepts,
//! using one explicit state machine, a single reusable text-edit overlay and
//! hit testing against the document's concepts. Rendering, persistence and
//! window chrome belong to the host.

pub mod canvas;
pub mod concept;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod perf;
pub mod spatial_index;
pub mod types;

pub use canvas::CanvasController;
pub use concept::{Concept, ConceptId, RichText, SizingPolicy, TextStyle};
pub use config::CanvasConfig;
pub use document::{ConceptStore, Document, DocumentState};
pub use error::{CanvasError, CanvasResult};
pub use hit_test::{TieBreak, hit_test};
pub use input::{CanvasEvent, EventOutcome, InteractionState, KeyCommand, PointerEvent, TextInput};
pub use overlay::TextEditOverlay;
pub use types::{CanvasPoint, Modifiers, Rect, Size};
