// File: crates/quadrant-core/src/reconcile.rs
// Summary: Explicit enter/update/exit reconciliation of keyed elements.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};

/// Attribute carrying the reconciliation key. Stripped from serialized markup.
pub const KEY_ATTR: &str = "data-key";

/// Result of a keyed join. `nodes` is aligned 1:1 with the input keys, in
/// data order; duplicate keys repeat the same element so later attribute
/// writes win.
#[derive(Debug)]
pub struct Join {
    pub nodes: Vec<NodeId>,
    pub entered: Vec<NodeId>,
    pub removed: usize,
}

/// Reconcile the children of `parent` carrying `class` against `keys`:
/// missing keys create a `tag` element (enter), matching keys reuse the
/// existing element (update), stale elements are removed (exit). Surviving
/// elements keep their `NodeId` and their class list, so per-element state
/// such as a hover class carries across renders. Elements are re-appended in
/// key order, which also restores sibling order after data reordering.
pub fn keyed_join(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    class: &str,
    keys: &[&str],
) -> Join {
    let mut existing: HashMap<String, NodeId> = HashMap::new();
    for child in doc.children_by_class(parent, class) {
        if let Some(key) = doc.attr(child, KEY_ATTR) {
            existing.insert(key.to_string(), child);
        }
    }

    let mut bound: HashMap<&str, NodeId> = HashMap::new();
    let mut nodes = Vec::with_capacity(keys.len());
    let mut entered = Vec::new();
    for &key in keys {
        if let Some(&node) = bound.get(key) {
            nodes.push(node);
            continue;
        }
        let node = match existing.remove(key) {
            Some(node) => {
                doc.append_child(parent, node);
                node
            }
            None => {
                let node = doc.create_element(tag);
                doc.set_class(node, class);
                doc.set_attr(node, KEY_ATTR, key);
                doc.append_child(parent, node);
                entered.push(node);
                node
            }
        };
        bound.insert(key, node);
        nodes.push(node);
    }

    let removed = existing.len();
    for (_, node) in existing {
        doc.remove(node);
    }

    Join { nodes, entered, removed }
}

/// One-element special case used for the artboard, container, grid and axis
/// groups: reuse the first matching child, create it if absent, drop extras.
pub fn single_join(doc: &mut Document, parent: NodeId, tag: &str, class: &str) -> NodeId {
    let mut matches = doc.children_by_class(parent, class).into_iter();
    let node = match matches.next() {
        Some(node) => {
            doc.append_child(parent, node);
            node
        }
        None => {
            let node = doc.create_element(tag);
            doc.set_class(node, class);
            doc.append_child(parent, node);
            node
        }
    };
    for extra in matches {
        doc.remove(extra);
    }
    node
}
