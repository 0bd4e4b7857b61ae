//! Document store tests: append-only semantics, snapshots and restore validation.

use crate::helpers::{TestDocumentBuilder, assert_concept_count, point};
use ideaboard::{CanvasController, CanvasError, Concept, ConceptStore, Document, DocumentState};

#[test]
fn test_save_concept_adds_one() {
    let mut doc = Document::new();
    let canvas = CanvasController::default();

    let concept = canvas.save_concept("New Concept", point(300.0, 400.0), &mut doc);

    let concept = concept.expect("non-empty text should create a concept");
    assert_eq!(concept.text().as_str(), "New Concept");
    assert_eq!(concept.center(), point(300.0, 400.0));
    assert_concept_count(&doc, 1);
}

#[test]
fn test_save_concept_rejects_empty_text() {
    let mut doc = Document::new();
    let canvas = CanvasController::default();

    assert!(canvas.save_concept("", point(300.0, 400.0), &mut doc).is_none());
    assert_concept_count(&doc, 0);
    assert!(!doc.is_dirty());
}

#[test]
fn test_whitespace_is_content() {
    let mut doc = Document::new();
    let canvas = CanvasController::default();

    assert!(canvas.save_concept("   ", point(0.0, 0.0), &mut doc).is_some());
    assert_concept_count(&doc, 1);
}

#[test]
fn test_ids_are_unique_across_saves() {
    let mut doc = Document::new();
    let canvas = CanvasController::default();

    let a = canvas.save_concept("Same", point(0.0, 0.0), &mut doc).unwrap();
    let b = canvas.save_concept("Same", point(0.0, 0.0), &mut doc).unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(a.created_seq(), 0);
    assert_eq!(b.created_seq(), 1);
}

#[test]
fn test_all_is_a_snapshot() {
    let mut doc = TestDocumentBuilder::new()
        .with_concept("First", (0.0, 0.0))
        .build();

    let before = doc.all();
    doc.add(Concept::new("Second", point(100.0, 0.0)).unwrap());

    assert_eq!(before.len(), 1);
    assert_eq!(doc.all().len(), 2);
    assert_eq!(doc.all()[0], before[0]);
}

#[test]
fn test_get_by_id() {
    let doc = TestDocumentBuilder::new()
        .with_concept("Findable", (5.0, 5.0))
        .build();
    let id = doc.all()[0].id();

    assert_eq!(doc.get(id).map(|c| c.text().as_str()), Some("Findable"));
    assert!(doc.get(Concept::new("x", point(0.0, 0.0)).unwrap().id()).is_none());
}

#[test]
fn test_dirty_tracking() {
    let mut doc = Document::new();
    assert!(!doc.is_dirty());

    doc.add(Concept::new("Edit", point(0.0, 0.0)).unwrap());
    assert!(doc.is_dirty());

    doc.mark_clean();
    assert!(!doc.is_dirty());
}

#[test]
fn test_json_round_trip_keeps_order_and_lookup() {
    let doc = TestDocumentBuilder::new()
        .with_numbered_concepts(&[(210.0, 310.0), (210.0, 110.0), (200.0, 300.0)])
        .build();

    let json = doc.to_json().unwrap();
    let mut restored = Document::from_json(&json).unwrap();

    assert_eq!(restored.all(), doc.all());
    assert_eq!(restored.concepts_at(point(205.0, 305.0)).len(), 2);
    assert!(!restored.is_dirty());

    // Sequence numbers continue after the restored ones
    let added = restored.add(Concept::new("Next", point(0.0, 0.0)).unwrap());
    assert_eq!(added.created_seq(), 3);
}

#[test]
fn test_restore_rejects_duplicate_ids() {
    let doc = TestDocumentBuilder::new()
        .with_concept("Dup", (0.0, 0.0))
        .build();
    let mut state = doc.to_state();
    state.concepts.push(state.concepts[0].clone());

    let err = Document::from_state(state).err().unwrap();
    assert!(matches!(err, CanvasError::DuplicateConceptId { .. }));
}

#[test]
fn test_restore_rejects_empty_text() {
    let doc = TestDocumentBuilder::new()
        .with_concept("Will be blanked", (0.0, 0.0))
        .build();

    let mut value = serde_json::to_value(doc.to_state()).unwrap();
    value["concepts"][0]["text"]["text"] = serde_json::json!("");
    let json = serde_json::to_string(&value).unwrap();

    let err = Document::from_json(&json).err().unwrap();
    assert!(matches!(err, CanvasError::EmptyConceptText { .. }));
}

#[test]
fn test_restore_rejects_malformed_json() {
    let err = Document::from_json("{ not json").err().unwrap();
    assert!(matches!(err, CanvasError::Json(_)));
}

#[test]
fn test_empty_state_defaults() {
    let state: DocumentState = serde_json::from_str("{}").unwrap();
    let doc = Document::from_state(state).unwrap();
    assert!(doc.is_empty());
}

// ============================================================================
// Restore: creation order and frames
// ============================================================================

fn state_json(doc: &Document) -> serde_json::Value {
    serde_json::to_value(doc.to_state()).unwrap()
}

fn restore(value: serde_json::Value) -> Result<Document, CanvasError> {
    Document::from_json(&serde_json::to_string(&value).unwrap())
}

#[test]
fn test_restore_sorts_and_renumbers_creation_order() {
    let doc = TestDocumentBuilder::new()
        .with_numbered_concepts(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)])
        .build();
    let original = doc.all();

    let mut value = state_json(&doc);
    value["concepts"][0]["created_seq"] = serde_json::json!(7);
    value["concepts"][1]["created_seq"] = serde_json::json!(u64::MAX);
    value["concepts"][2]["created_seq"] = serde_json::json!(2);

    let mut restored = restore(value).unwrap();
    let ids: Vec<_> = restored.all().iter().map(|c| c.id()).collect();
    let seqs: Vec<_> = restored.all().iter().map(|c| c.created_seq()).collect();

    assert_eq!(ids, vec![original[2].id(), original[0].id(), original[1].id()]);
    assert_eq!(seqs, vec![0, 1, 2]);

    let added = restored.add(Concept::new("Next", point(300.0, 0.0)).unwrap());
    assert_eq!(added.created_seq(), 3);
}

#[test]
fn test_restore_at_max_sequence_keeps_adding() {
    let doc = TestDocumentBuilder::new()
        .with_concept("Last", (0.0, 0.0))
        .build();

    let mut value = state_json(&doc);
    value["concepts"][0]["created_seq"] = serde_json::json!(u64::MAX - 1);
    let mut restored = restore(value).unwrap();

    assert_eq!(restored.all()[0].created_seq(), 0);
    let first = restored.add(Concept::new("After", point(50.0, 0.0)).unwrap()).created_seq();
    let second = restored.add(Concept::new("And again", point(90.0, 0.0)).unwrap()).created_seq();
    assert_eq!((first, second), (1, 2));
}

fn assert_frame_rejected(edit: impl FnOnce(&mut serde_json::Value)) {
    let doc = TestDocumentBuilder::new()
        .with_concept("Framed", (40.0, 40.0))
        .build();
    let mut value = state_json(&doc);
    edit(&mut value["concepts"][0]["frame"]);

    let err = restore(value).err().unwrap();
    assert!(matches!(err, CanvasError::InvalidFrame { .. }), "got {err}");
}

#[test]
fn test_restore_rejects_negative_width() {
    assert_frame_rejected(|frame| frame["size"]["width"] = serde_json::json!(-100.0));
}

#[test]
fn test_restore_rejects_zero_height() {
    assert_frame_rejected(|frame| frame["size"]["height"] = serde_json::json!(0.0));
}

#[test]
fn test_restore_rejects_off_center_frame() {
    assert_frame_rejected(|frame| frame["center"]["x"] = serde_json::json!(500.0));
}

#[test]
fn test_restore_rejects_infinite_size() {
    // Too large for f32, so it reads back as infinity
    assert_frame_rejected(|frame| frame["size"]["width"] = serde_json::json!(1e39));
}

#[test]
fn test_restored_concept_is_hit_at_its_center() {
    let doc = TestDocumentBuilder::new()
        .with_concept("Anchor", (40.0, 40.0))
        .build();
    let restored = restore(state_json(&doc)).unwrap();

    assert_eq!(restored.concepts_at(point(40.0, 40.0)).len(), 1);
}
