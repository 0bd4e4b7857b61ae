//! Hit testing tests: point containment, overlap, and tie-break policies.

use crate::helpers::{TestDocumentBuilder, overlapping_document, point};
use ideaboard::{CanvasController, CanvasPoint, Concept, ConceptStore, TieBreak, hit_test};

#[test]
fn test_click_hits_both_overlapping_concepts() {
    let doc = overlapping_document();
    let all = doc.all();

    let hits = hit_test(point(205.0, 305.0), &all);
    let ids: Vec<_> = hits.iter().map(|c| c.id()).collect();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&all[0].id()));
    assert!(ids.contains(&all[2].id()));
    assert!(!ids.contains(&all[1].id()));
}

#[test]
fn test_clicked_concepts_absent_when_nothing_there() {
    let doc = overlapping_document();
    let canvas = CanvasController::default();

    assert!(canvas.clicked_concepts(point(1200.0, 1300.0), &doc).is_none());

    let hits = canvas.clicked_concepts(point(205.0, 305.0), &doc).unwrap();
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_frame_edges_are_inside() {
    let doc = TestDocumentBuilder::new()
        .with_concept("Edge", (100.0, 100.0))
        .build();
    let concept = doc.all().remove(0);
    let frame = concept.frame();

    for corner in [
        point(frame.min_x(), frame.min_y()),
        point(frame.max_x(), frame.min_y()),
        point(frame.min_x(), frame.max_y()),
        point(frame.max_x(), frame.max_y()),
    ] {
        assert_eq!(doc.concepts_at(corner).len(), 1, "corner {:?} missed", corner);
    }

    assert!(doc.concepts_at(point(frame.max_x() + 0.01, 100.0)).is_empty());
    assert!(doc.concepts_at(point(100.0, frame.min_y() - 0.01)).is_empty());
}

#[test]
fn test_adjoining_concepts_share_their_edge() {
    // Default minimum width is 60, so these frames touch at x = 130
    let doc = TestDocumentBuilder::new()
        .with_concept("L", (100.0, 0.0))
        .with_concept("R", (160.0, 0.0))
        .build();

    assert_eq!(doc.concepts_at(point(130.0, 0.0)).len(), 2);
}

#[test]
fn test_duplicates_in_input_are_reported_once() {
    let concept = Concept::new("Twice", point(0.0, 0.0)).unwrap();
    let input = [&concept, &concept];

    assert_eq!(hit_test(point(0.0, 0.0), input).len(), 1);
}

#[test]
fn test_saved_concept_is_found_at_its_center() {
    let mut doc = TestDocumentBuilder::new().build();
    let canvas = CanvasController::default();

    let concept = canvas
        .save_concept("Round trip", point(300.0, 400.0), &mut doc)
        .unwrap();

    let all = doc.all();
    assert!(all.iter().any(|c| c.id() == concept.id()));

    let hits = canvas.clicked_concepts(concept.center(), &doc).unwrap();
    assert!(hits.iter().any(|c| c.id() == concept.id()));
}

#[test]
fn test_spatial_lookup_matches_linear_scan() {
    let doc = TestDocumentBuilder::new()
        .with_numbered_concepts(&[
            (0.0, 0.0),
            (40.0, 10.0),
            (80.0, 20.0),
            (500.0, 500.0),
            (520.0, 510.0),
            (-200.0, 75.0),
        ])
        .build();
    let all = doc.all();

    let mut y = -250.0;
    while y <= 600.0 {
        let mut x = -300.0;
        while x <= 600.0 {
            let p = CanvasPoint::new(x, y);
            let mut linear: Vec<_> = hit_test(p, &all).iter().map(|c| c.id()).collect();
            let mut indexed: Vec<_> = doc.concepts_at(p).iter().map(|c| c.id()).collect();
            linear.sort();
            indexed.sort();
            assert_eq!(linear, indexed, "mismatch at {:?}", p);
            x += 7.5;
        }
        y += 7.5;
    }
}

// ============================================================================
// Tie-break policies
// ============================================================================

#[test]
fn test_tie_break_smallest_area() {
    let doc = TestDocumentBuilder::new()
        .with_concept("A considerably longer label", (200.0, 300.0))
        .with_concept("Short", (200.0, 300.0))
        .build();

    let hits = doc.concepts_at(point(200.0, 300.0));
    let picked = TieBreak::SmallestArea.pick(&hits).unwrap();
    assert_eq!(picked.text().as_str(), "Short");
}

#[test]
fn test_tie_break_most_recent() {
    let doc = overlapping_document();

    let hits = doc.concepts_at(point(205.0, 305.0));
    let picked = TieBreak::MostRecent.pick(&hits).unwrap();
    assert_eq!(picked.text().as_str(), "Foo #2");
}

#[test]
fn test_tie_break_on_no_hits() {
    assert!(TieBreak::SmallestArea.pick(&[]).is_none());
    assert!(TieBreak::MostRecent.pick(&[]).is_none());
}
