//! Error types for the canvas core
//!
//! Interaction handling never fails; these errors only come out of parsing
//! configuration and restoring document snapshots.

use thiserror::Error;

use crate::concept::ConceptId;

/// Errors that can occur while configuring the canvas or restoring a document
#[derive(Error, Debug)]
pub enum CanvasError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range
    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A snapshot contains a concept with an empty label
    #[error("Concept {id} has empty text")]
    EmptyConceptText { id: ConceptId },

    /// A snapshot contains a concept whose frame cannot be hit at its center
    #[error("Concept {id} has an invalid frame: {reason}")]
    InvalidFrame { id: ConceptId, reason: String },

    /// A snapshot contains the same concept id twice
    #[error("Duplicate concept id: {id}")]
    DuplicateConceptId { id: ConceptId },
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
