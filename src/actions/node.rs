use crate::app::{AppState, DEFAULT_NODE_TEXT};

/// Creates a child of the selected node. On an empty tree this creates the
/// root; with no selection on a non-empty tree it does nothing.
pub fn create_child(app: &mut AppState) {
    if app.store.is_empty() {
        app.store.create_node(None, DEFAULT_NODE_TEXT);
        app.mark_dirty();
        return;
    }

    if let Some(selected) = app.store.selected() {
        if app.store.create_node(Some(selected), DEFAULT_NODE_TEXT).is_some() {
            app.mark_dirty();
        }
    }
}

/// Creates a sibling after the selected node's group. The root has no parent,
/// so asking for its sibling is a no-op.
pub fn create_sibling(app: &mut AppState) {
    if let Some(selected) = app.store.selected() {
        if let Some(parent) = app.store.parent_of(selected) {
            if app.store.create_node(Some(parent), DEFAULT_NODE_TEXT).is_some() {
                app.mark_dirty();
            }
        }
    }
}

/// Deletes the selected subtree. The root and an empty selection are left
/// alone.
pub fn delete_selected(app: &mut AppState) {
    if let Some(selected) = app.store.selected() {
        if Some(selected) == app.store.root() {
            app.set_message("Cannot delete the root node");
            return;
        }
        app.store.delete_node(selected);
        app.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn app_with_tree() -> AppState {
        let mut app = AppState::new(AppConfig::default());
        let root = app.store.root().unwrap();
        app.store.create_node(Some(root), "A");
        app.store.create_node(Some(root), "B");
        app.store.select(Some(root));
        app
    }

    #[test]
    fn test_create_child_appends_and_selects() {
        let mut app = app_with_tree();
        let root = app.store.root().unwrap();
        create_child(&mut app);
        let children = app.store.children_of(root);
        assert_eq!(children.len(), 3);
        assert_eq!(app.store.selected(), Some(*children.last().unwrap()));
        assert!(app.is_dirty);
    }

    #[test]
    fn test_create_child_without_selection_is_noop() {
        let mut app = app_with_tree();
        app.store.select(None);
        let before = app.store.len();
        create_child(&mut app);
        assert_eq!(app.store.len(), before);
    }

    #[test]
    fn test_create_sibling_of_root_is_noop() {
        let mut app = app_with_tree();
        let before = app.store.len();
        create_sibling(&mut app);
        assert_eq!(app.store.len(), before);
    }

    #[test]
    fn test_create_sibling_shares_parent() {
        let mut app = app_with_tree();
        let root = app.store.root().unwrap();
        let a = app.store.children_of(root)[0];
        app.store.select(Some(a));
        create_sibling(&mut app);
        let new_id = app.store.selected().unwrap();
        assert_eq!(app.store.parent_of(new_id), Some(root));
        assert_eq!(app.store.children_of(root).len(), 3);
    }

    #[test]
    fn test_delete_selected_cascades() {
        let mut app = app_with_tree();
        let root = app.store.root().unwrap();
        let a = app.store.children_of(root)[0];
        app.store.create_node(Some(a), "A1");
        app.store.select(Some(a));
        delete_selected(&mut app);
        assert_eq!(app.store.len(), 2); // root + B
        assert_eq!(app.store.selected(), None);
    }

    #[test]
    fn test_delete_root_refused() {
        let mut app = app_with_tree();
        let before = app.store.len();
        delete_selected(&mut app);
        assert_eq!(app.store.len(), before);
        assert!(app.message.is_some());
    }
}
