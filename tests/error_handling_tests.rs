// Every invalid target or invariant-protecting refusal is a silent no-op:
// these tests pin down that nothing panics and nothing changes.

use sprig::layout::{compute, LayoutMode};
use sprig::model::{Node, NodeId};
use sprig::store::TreeStore;

fn small_store() -> (TreeStore, NodeId, NodeId) {
    let mut store = TreeStore::new();
    let root = store.create_node(None, "Root").unwrap();
    let child = store.create_node(Some(root), "Child").unwrap();
    (store, root, child)
}

#[test]
fn test_create_under_unknown_parent() {
    let (mut store, ..) = small_store();
    let before = store.snapshot();
    assert!(store.create_node(Some(NodeId(999)), "ghost").is_none());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_update_unknown_node() {
    let (mut store, ..) = small_store();
    let before = store.snapshot();
    store.update_text(NodeId(999), "ghost");
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_delete_unknown_node() {
    let (mut store, ..) = small_store();
    let before = store.snapshot();
    store.delete_node(NodeId(999));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_delete_root_refused() {
    let (mut store, root, _child) = small_store();
    store.delete_node(root);
    assert_eq!(store.len(), 2);
    assert_eq!(store.root(), Some(root));
}

#[test]
fn test_select_unknown_node_ignored() {
    let (mut store, _root, child) = small_store();
    store.select(Some(child));
    store.select(Some(NodeId(999)));
    assert_eq!(store.selected(), Some(child));
}

#[test]
fn test_selection_always_valid_or_empty() {
    let (mut store, root, child) = small_store();
    let grand = store.create_node(Some(child), "Grand").unwrap();
    store.select(Some(grand));
    store.delete_node(child);
    // Stale selection was inside the deleted subtree.
    assert_eq!(store.selected(), None);
    assert_eq!(store.len(), 1);
    assert_eq!(store.root(), Some(root));
}

#[test]
fn test_layout_survives_dangling_references() {
    let (store, root, child) = small_store();
    let mut entries = store.snapshot();
    // A node claiming a parent that does not exist.
    entries.push((NodeId(50), Node::new("stray", Some(NodeId(40)))));
    let corrupt = TreeStore::from_snapshot(entries);

    for mode in [LayoutMode::Center, LayoutMode::Top] {
        let positions = compute(&corrupt, mode);
        assert!(positions.contains_key(&root));
        assert!(positions.contains_key(&child));
        assert!(!positions.contains_key(&NodeId(50)));
    }
}

#[test]
fn test_layout_of_empty_store() {
    let store = TreeStore::new();
    assert!(compute(&store, LayoutMode::Center).is_empty());
    assert!(compute(&store, LayoutMode::Top).is_empty());
}

#[test]
fn test_oversized_input_is_truncated_not_rejected() {
    let (mut store, _root, child) = small_store();
    let huge = "x".repeat(10_000);
    store.update_text(child, &huge);
    let text = &store.get(child).unwrap().text;
    assert_eq!(text.chars().count(), sprig::model::MAX_TEXT_LEN);
}
