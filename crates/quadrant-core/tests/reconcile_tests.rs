// File: crates/quadrant-core/tests/reconcile_tests.rs
// Purpose: Enter/update/exit semantics and stable element identity.

use quadrant_core::reconcile::{keyed_join, single_join, KEY_ATTR};
use quadrant_core::Document;

#[test]
fn enter_creates_missing_elements() {
    let mut doc = Document::new();
    let parent = doc.create_element("g");
    let join = keyed_join(&mut doc, parent, "circle", "qc-node", &["a", "b", "c"]);
    assert_eq!(join.nodes.len(), 3);
    assert_eq!(join.entered.len(), 3);
    assert_eq!(join.removed, 0);
    assert_eq!(doc.children(parent).len(), 3);
    for (node, key) in join.nodes.iter().zip(["a", "b", "c"]) {
        assert_eq!(doc.attr(*node, KEY_ATTR), Some(key));
        assert_eq!(doc.tag(*node), "circle");
    }
}

#[test]
fn update_reuses_surviving_elements() {
    let mut doc = Document::new();
    let parent = doc.create_element("g");
    let first = keyed_join(&mut doc, parent, "circle", "qc-node", &["a", "b"]);
    let second = keyed_join(&mut doc, parent, "circle", "qc-node", &["b", "a"]);
    assert!(second.entered.is_empty());
    assert_eq!(second.removed, 0);
    // same elements, reordered to match the new data order
    assert_eq!(second.nodes[0], first.nodes[1]);
    assert_eq!(second.nodes[1], first.nodes[0]);
    assert_eq!(doc.children(parent), &[first.nodes[1], first.nodes[0]]);
}

#[test]
fn exit_removes_stale_elements() {
    let mut doc = Document::new();
    let parent = doc.create_element("g");
    keyed_join(&mut doc, parent, "circle", "qc-node", &["a", "b", "c"]);
    let join = keyed_join(&mut doc, parent, "circle", "qc-node", &["b"]);
    assert_eq!(join.nodes.len(), 1);
    assert_eq!(join.removed, 2);
    assert_eq!(doc.children(parent).len(), 1);
}

#[test]
fn class_state_survives_reconciliation() {
    let mut doc = Document::new();
    let parent = doc.create_element("g");
    let first = keyed_join(&mut doc, parent, "circle", "qc-node", &["a", "b"]);
    // hover state applied between renders
    doc.set_class(first.nodes[0], "qc-node active");
    let second = keyed_join(&mut doc, parent, "circle", "qc-node", &["a", "b"]);
    assert_eq!(second.nodes[0], first.nodes[0]);
    assert_eq!(doc.class(second.nodes[0]), "qc-node active");
}

#[test]
fn duplicate_keys_collapse_to_one_element() {
    let mut doc = Document::new();
    let parent = doc.create_element("g");
    let join = keyed_join(&mut doc, parent, "circle", "qc-node", &["a", "a", "b"]);
    // aligned with input keys, but only two distinct elements exist
    assert_eq!(join.nodes.len(), 3);
    assert_eq!(join.nodes[0], join.nodes[1]);
    assert_eq!(doc.children(parent).len(), 2);
}

#[test]
fn single_join_is_idempotent_and_prunes_extras() {
    let mut doc = Document::new();
    let parent = doc.create_element("svg");
    let grid = single_join(&mut doc, parent, "rect", "qc-grid");
    assert_eq!(single_join(&mut doc, parent, "rect", "qc-grid"), grid);
    assert_eq!(doc.children(parent).len(), 1);

    // a stray duplicate gets dropped on the next join
    let stray = doc.create_element("rect");
    doc.set_class(stray, "qc-grid");
    doc.append_child(parent, stray);
    assert_eq!(single_join(&mut doc, parent, "rect", "qc-grid"), grid);
    assert_eq!(doc.children(parent).len(), 1);
}
