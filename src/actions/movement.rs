use crate::app::AppState;

// Structural navigation: selection moves along parent/child/sibling links in
// `children` order, never by screen geometry, so it behaves the same under
// both layout modes. A missing target leaves the selection unchanged.

/// Previous sibling, falling back to the parent when already first.
pub fn go_up(app: &mut AppState) {
    let Some(selected) = app.store.selected() else {
        return;
    };
    let Some(parent) = app.store.parent_of(selected) else {
        return;
    };
    let siblings = app.store.children_of(parent);
    match siblings.iter().position(|id| *id == selected) {
        Some(0) => app.store.select(Some(parent)),
        Some(idx) => {
            let target = siblings[idx - 1];
            app.store.select(Some(target));
        }
        None => {}
    }
}

/// Next sibling, or nothing when already last.
pub fn go_down(app: &mut AppState) {
    let Some(selected) = app.store.selected() else {
        return;
    };
    let Some(parent) = app.store.parent_of(selected) else {
        return;
    };
    let siblings = app.store.children_of(parent);
    if let Some(idx) = siblings.iter().position(|id| *id == selected) {
        if idx + 1 < siblings.len() {
            let target = siblings[idx + 1];
            app.store.select(Some(target));
        }
    }
}

/// Parent, when there is one.
pub fn go_left(app: &mut AppState) {
    if let Some(selected) = app.store.selected() {
        if let Some(parent) = app.store.parent_of(selected) {
            app.store.select(Some(parent));
        }
    }
}

/// First child, when any exist.
pub fn go_right(app: &mut AppState) {
    if let Some(selected) = app.store.selected() {
        if let Some(first) = app.store.children_of(selected).first().copied() {
            app.store.select(Some(first));
        }
    }
}

pub fn clear_selection(app: &mut AppState) {
    app.store.select(None);
}
