use sprig::actions::{execute_action, Action};
use sprig::app::AppState;
use sprig::config::AppConfig;
use sprig::io::{export_outline, load_store, save_store};
use sprig::model::NodeId;
use sprig::store::TreeStore;
use std::fs;
use tempfile::TempDir;

fn project_store() -> TreeStore {
    let mut store = TreeStore::new();
    let root = store.create_node(None, "My Project").unwrap();
    let t1 = store.create_node(Some(root), "Task 1").unwrap();
    let t2 = store.create_node(Some(root), "Task 2").unwrap();
    store.create_node(Some(t1), "Subtask 1.1");
    store.create_node(Some(t2), "Subtask 2.1");
    store.create_node(Some(t2), "Subtask 2.2");
    store
}

#[test]
fn test_snapshot_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("project.sprig.json");

    let store = project_store();
    save_store(&store, &path).unwrap();
    let loaded = load_store(&path).unwrap();

    assert_eq!(loaded.len(), store.len());
    assert_eq!(loaded.root(), store.root());
    assert_eq!(loaded.selected(), None, "selection is not persisted");
    for (id, node) in store.iter() {
        let copy = loaded.get(id).expect("node survives round trip");
        assert_eq!(copy.text, node.text);
        assert_eq!(copy.parent, node.parent);
        assert_eq!(copy.children, node.children);
        assert_eq!(copy.collapsed, node.collapsed);
    }
}

#[test]
fn test_repeated_saves_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.json");
    let second = temp_dir.path().join("b.json");

    let store = project_store();
    save_store(&store, &first).unwrap();
    save_store(&store, &second).unwrap();
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_positions_recomputed_not_restored() {
    use sprig::layout::{compute, LayoutMode};

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("geom.json");

    let store = project_store();
    let before = compute(&store, LayoutMode::Top);
    save_store(&store, &path).unwrap();
    let loaded = load_store(&path).unwrap();
    let after = compute(&loaded, LayoutMode::Top);
    assert_eq!(before, after, "same tree + mode means same geometry");
}

#[test]
fn test_export_outline_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("outline.txt");

    let store = project_store();
    export_outline(&store, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let expected = "My Project\n\tTask 1\n\t\tSubtask 1.1\n\tTask 2\n\t\tSubtask 2.1\n\t\tSubtask 2.2\n";
    assert_eq!(content, expected);
}

#[test]
fn test_export_flattens_multiline_labels() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("outline.txt");

    let mut store = TreeStore::new();
    store.create_node(None, "line one\nline two");
    export_outline(&store, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "line one line two\n");
}

#[test]
fn test_save_action_writes_current_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.sprig.json");

    let mut app = AppState::new(AppConfig::default());
    execute_action(Action::CreateChild, &mut app).unwrap();
    app.filename = Some(path.clone());
    assert!(app.is_dirty);

    execute_action(Action::Save, &mut app).unwrap();
    assert!(path.exists());
    assert!(!app.is_dirty);

    let loaded = load_store(&path).unwrap();
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");
    assert!(load_store(&path).is_err());
}

#[test]
fn test_id_allocation_continues_after_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ids.json");

    let store = project_store();
    let max_id = store.iter().map(|(id, _)| id.0).max().unwrap();
    save_store(&store, &path).unwrap();

    let mut loaded = load_store(&path).unwrap();
    let root = loaded.root().unwrap();
    let fresh = loaded.create_node(Some(root), "new").unwrap();
    assert!(fresh > NodeId(max_id), "restored ids must stay unique");
}
