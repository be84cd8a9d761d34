use crate::config::AppConfig;
use crate::layout::{self, LayoutMode, Position};
use crate::model::NodeId;
use crate::store::TreeStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

pub const DEFAULT_NODE_TEXT: &str = "New Node";

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    /// Default mode: commands act on the selected node.
    Navigating,
    /// A node's text is being composed in a buffer; the store is untouched
    /// until the edit commits.
    Editing { buffer: String, cursor_pos: usize },
    /// Mouse drag moves the viewport. `anchor` is the last drag position in
    /// terminal cells.
    Panning { anchor: (u16, u16) },
    Help,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub store: TreeStore,
    pub layout_mode: LayoutMode,
    /// Derived view, refreshed by `relayout()` after every mutation on the
    /// same event tick. Never persisted.
    pub positions: HashMap<NodeId, Position>,
    pub config: AppConfig,
    pub filename: Option<PathBuf>,

    // Viewport state, world coordinates of the top-left corner
    pub viewport_x: f64,
    pub viewport_y: f64,

    // Message for status line
    pub message: Option<String>,

    pub is_dirty: bool,
    pub last_modify_time: Option<Instant>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut store = TreeStore::new();
        // The first node is created implicitly and becomes the root.
        store.create_node(None, DEFAULT_NODE_TEXT);

        let layout_mode = config.layout;
        let positions = layout::compute(&store, layout_mode);

        Self {
            running: true,
            mode: AppMode::Navigating,
            store,
            layout_mode,
            positions,
            config,
            filename: None,
            viewport_x: 0.0,
            viewport_y: 0.0,
            message: None,
            is_dirty: false,
            last_modify_time: None,
        }
    }

    /// Full fresh layout pass. Called at the end of every executed action so
    /// the renderer only ever sees `(tree, positions)` pairs that agree.
    pub fn relayout(&mut self) {
        self.positions = layout::compute(&self.store, self.layout_mode);
    }

    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
        self.last_modify_time = Some(Instant::now());
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let app = AppState::new(AppConfig::default());
        assert!(app.running);
        assert_eq!(app.mode, AppMode::Navigating);
        // Root is auto-created and selected.
        let root = app.store.root().expect("root auto-created");
        assert_eq!(app.store.selected(), Some(root));
        assert_eq!(app.store.get(root).unwrap().text, DEFAULT_NODE_TEXT);
        // Positions already agree with the store.
        assert_eq!(app.positions.len(), 1);
        assert!(app.positions.contains_key(&root));
    }

    #[test]
    fn test_relayout_tracks_store() {
        let mut app = AppState::new(AppConfig::default());
        let root = app.store.root().unwrap();
        app.store.create_node(Some(root), "child");
        app.relayout();
        assert_eq!(app.positions.len(), 2);
    }
}
