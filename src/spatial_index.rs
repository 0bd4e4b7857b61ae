//! Spatial Index Module
//!
//! R-tree over concept frames so point lookups on a large map stay
//! logarithmic. The linear scan in `hit_test` is the reference behavior; this
//! index must answer every point query with exactly the same set.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

use crate::concept::{Concept, ConceptId};
use crate::types::{CanvasPoint, Rect};

/// Bounding box of one concept, as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: ConceptId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(id: ConceptId, frame: Rect) -> Self {
        Self {
            id,
            min_x: frame.min_x(),
            min_y: frame.min_y(),
            max_x: frame.max_x(),
            max_y: frame.max_y(),
        }
    }

    pub fn for_concept(concept: &Concept) -> Self {
        Self::new(concept.id(), concept.frame())
    }

    /// Inclusive on every edge, matching `Rect::contains`.
    #[inline]
    pub fn contains_point(&self, point: CanvasPoint) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index of concept frames.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ConceptId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load an index from existing concepts.
    pub fn from_concepts<'a, I>(concepts: I) -> Self
    where
        I: IntoIterator<Item = &'a Concept>,
    {
        let mut index = Self::new();
        index.rebuild(concepts);
        index
    }

    /// Insert a concept's frame. Re-inserting an id replaces its old entry.
    pub fn insert(&mut self, concept: &Concept) {
        let entry = SpatialEntry::for_concept(concept);
        if let Some(old_entry) = self.entries.insert(entry.id, entry) {
            self.tree.remove(&old_entry);
        }
        self.tree.insert(entry);
    }

    /// Ids of all concepts whose frame contains `point`.
    pub fn query_point(&self, point: CanvasPoint) -> Vec<ConceptId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point))
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn rebuild<'a, I>(&mut self, concepts: I)
    where
        I: IntoIterator<Item = &'a Concept>,
    {
        self.entries = concepts
            .into_iter()
            .map(|c| (c.id(), SpatialEntry::for_concept(c)))
            .collect();
        self.tree = RTree::bulk_load(self.entries.values().copied().collect());
    }
}
