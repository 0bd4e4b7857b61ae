//! The concept store.
//!
//! [`ConceptStore`] is the narrow surface the interaction core writes to.
//! [`Document`] is the in-memory implementation: an append-only list of
//! concepts with an R-tree kept in step for point lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::concept::{Concept, ConceptId};
use crate::error::{CanvasError, CanvasResult};
use crate::hit_test::hit_test;
use crate::spatial_index::SpatialIndex;
use crate::types::CanvasPoint;

/// Snapshot format version written by [`Document::to_state`]
pub const DOCUMENT_STATE_VERSION: u32 = 1;

/// Append-only collection of concepts.
///
/// Callers only ever add; the store never removes or edits in place.
pub trait ConceptStore {
    /// Append a concept and return it as stored. The caller guarantees its
    /// text is non-empty.
    fn add(&mut self, concept: Concept) -> &Concept;

    /// A fresh snapshot of every concept, in insertion order.
    fn all(&self) -> Vec<Concept>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concepts whose frame contains `point`.
    fn concepts_at(&self, point: CanvasPoint) -> Vec<Concept> {
        let all = self.all();
        hit_test(point, &all).into_iter().cloned().collect()
    }
}

/// In-memory mind-map document.
#[derive(Default)]
pub struct Document {
    concepts: Vec<Concept>,
    index: SpatialIndex,
    next_seq: u64,
    dirty: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.id() == id)
    }

    /// True when concepts were added since the last [`mark_clean`](Self::mark_clean).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the host once it has persisted the document.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn to_state(&self) -> DocumentState {
        DocumentState {
            version: DOCUMENT_STATE_VERSION,
            concepts: self.concepts.clone(),
        }
    }

    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_state())?)
    }

    /// Restore a document from a snapshot, rejecting anything that breaks
    /// the store invariants.
    ///
    /// Concepts keep their relative creation order but are renumbered from
    /// zero, so stored sequence numbers never need to be trusted.
    pub fn from_state(state: DocumentState) -> CanvasResult<Self> {
        let mut seen = HashSet::with_capacity(state.concepts.len());
        for concept in &state.concepts {
            if concept.text().is_empty() {
                return Err(CanvasError::EmptyConceptText { id: concept.id() });
            }
            if !seen.insert(concept.id()) {
                return Err(CanvasError::DuplicateConceptId { id: concept.id() });
            }
            check_frame(concept)?;
        }

        let mut concepts = state.concepts;
        concepts.sort_by_key(|c| c.created_seq());
        for (seq, concept) in (0u64..).zip(concepts.iter_mut()) {
            concept.set_created_seq(seq);
        }
        let next_seq = concepts.len() as u64;
        let index = SpatialIndex::from_concepts(&concepts);
        debug_assert_eq!(index.len(), concepts.len());

        info!(
            version = state.version,
            concepts = concepts.len(),
            "Restored document"
        );

        Ok(Self {
            concepts,
            index,
            next_seq,
            dirty: false,
        })
    }

    pub fn from_json(json: &str) -> CanvasResult<Self> {
        let state: DocumentState = serde_json::from_str(json)?;
        Self::from_state(state)
    }
}

impl ConceptStore for Document {
    fn add(&mut self, mut concept: Concept) -> &Concept {
        debug_assert!(!concept.text().is_empty(), "empty concept reached the store");

        concept.set_created_seq(self.next_seq);
        self.next_seq += 1;
        self.index.insert(&concept);
        debug!(id = %concept.id(), seq = concept.created_seq(), "Concept added");

        let slot = self.concepts.len();
        self.concepts.push(concept);
        self.dirty = true;
        &self.concepts[slot]
    }

    fn all(&self) -> Vec<Concept> {
        self.concepts.clone()
    }

    fn len(&self) -> usize {
        self.concepts.len()
    }

    fn concepts_at(&self, point: CanvasPoint) -> Vec<Concept> {
        let ids: HashSet<ConceptId> = self.index.query_point(point).into_iter().collect();
        self.concepts
            .iter()
            .filter(|c| ids.contains(&c.id()))
            .cloned()
            .collect()
    }
}

/// A stored frame must be finite, have a positive size and sit on the
/// concept's center, or the concept could not be hit at its own center.
fn check_frame(concept: &Concept) -> CanvasResult<()> {
    let frame = concept.frame();
    let invalid = |reason: &str| CanvasError::InvalidFrame {
        id: concept.id(),
        reason: reason.to_string(),
    };

    if !concept.center().is_finite() || !frame.center().is_finite() {
        return Err(invalid("center is not finite"));
    }
    if !(frame.size.width.is_finite() && frame.size.width > 0.0)
        || !(frame.size.height.is_finite() && frame.size.height > 0.0)
    {
        return Err(invalid("size must be positive"));
    }
    if frame.center() != concept.center() {
        return Err(invalid("frame is not centered on the concept"));
    }
    Ok(())
}

/// Serializable snapshot of a [`Document`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

fn default_version() -> u32 {
    DOCUMENT_STATE_VERSION
}
