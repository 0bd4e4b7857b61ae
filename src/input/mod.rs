//! Pointer and keyboard input handling for the canvas.
//!
//! ## Architecture
//!
//! The interaction mode is one explicit state machine (`InteractionState`).
//! Handlers are `impl CanvasController` blocks split by event kind so each
//! gesture phase reads on its own.
//!
//! ## Modules
//!
//! - `state` - Interaction state enum and pointer press tracking
//! - `event` - Event and outcome types
//! - `mouse_down` - Pointer down (start a gesture)
//! - `drag` - Pointer drag (track travel)
//! - `mouse_up` - Pointer up (clicks: place, select, cancel)
//! - `keyboard` - Commit/cancel commands and overlay text input

mod drag;
mod event;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use event::{CanvasEvent, EventOutcome, KeyCommand, PointerEvent, TextInput};
pub use state::{InteractionState, PointerPress};
