use crate::app::{AppMode, AppState};
use crate::ui::map::{WORLD_PER_CELL_X, WORLD_PER_CELL_Y};

/// Flips between the center and top layouts. The store is untouched; the
/// relayout at the end of the dispatch picks up the new mode.
pub fn switch_layout(app: &mut AppState) {
    app.layout_mode = app.layout_mode.toggled();
    app.set_message(format!("Layout: {}", app.layout_mode));
}

/// Collapse is carried on the node and persisted, but does not affect layout.
pub fn toggle_collapse(app: &mut AppState) {
    if let Some(selected) = app.store.selected() {
        if let Some(node) = app.store.get(selected) {
            let collapsed = !node.collapsed;
            app.store.set_collapsed(selected, collapsed);
            app.mark_dirty();
        }
    }
}

pub fn begin_pan(app: &mut AppState, x: u16, y: u16) {
    if matches!(app.mode, AppMode::Navigating) {
        app.mode = AppMode::Panning { anchor: (x, y) };
    }
}

/// Moves the viewport by the drag delta, converted from cells to world
/// units, and re-anchors for the next event.
pub fn pan_move(app: &mut AppState, x: u16, y: u16) {
    if let AppMode::Panning { anchor } = &mut app.mode {
        let dx = anchor.0 as f64 - x as f64;
        let dy = anchor.1 as f64 - y as f64;
        *anchor = (x, y);
        app.viewport_x += dx * WORLD_PER_CELL_X;
        app.viewport_y += dy * WORLD_PER_CELL_Y;
    }
}

pub fn end_pan(app: &mut AppState) {
    if matches!(app.mode, AppMode::Panning { .. }) {
        app.mode = AppMode::Navigating;
    }
}

pub fn show_help(app: &mut AppState) {
    if matches!(app.mode, AppMode::Navigating) {
        app.mode = AppMode::Help;
    }
}

pub fn close_help(app: &mut AppState) {
    if matches!(app.mode, AppMode::Help) {
        app.mode = AppMode::Navigating;
    }
}
