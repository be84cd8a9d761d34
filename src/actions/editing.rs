use crate::app::{AppMode, AppState};

/// Enters edit mode on the selected node, seeding the buffer with its
/// current text and the cursor at the end. Without a selection, or while
/// already editing, nothing happens.
pub fn start_edit(app: &mut AppState) {
    if matches!(app.mode, AppMode::Editing { .. }) {
        return;
    }
    if let Some(selected) = app.store.selected() {
        if let Some(node) = app.store.get(selected) {
            let buffer = node.text.clone();
            let cursor_pos = buffer.len();
            app.mode = AppMode::Editing { buffer, cursor_pos };
        }
    }
}

// Cursor positions are byte offsets kept on char boundaries.

fn prev_boundary(buffer: &str, pos: usize) -> usize {
    buffer[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(buffer: &str, pos: usize) -> usize {
    buffer[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(pos)
}

pub fn type_char(app: &mut AppState, c: char) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        buffer.insert(*cursor_pos, c);
        *cursor_pos += c.len_utf8();
    }
}

/// Shift+Enter: a literal newline in the buffer, no commit.
pub fn insert_newline(app: &mut AppState) {
    type_char(app, '\n');
}

pub fn backspace(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        if *cursor_pos > 0 {
            let start = prev_boundary(buffer, *cursor_pos);
            buffer.replace_range(start..*cursor_pos, "");
            *cursor_pos = start;
        }
    }
}

pub fn delete_char(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        if *cursor_pos < buffer.len() {
            let end = next_boundary(buffer, *cursor_pos);
            buffer.replace_range(*cursor_pos..end, "");
        }
    }
}

pub fn move_cursor_left(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        if *cursor_pos > 0 {
            *cursor_pos = prev_boundary(buffer, *cursor_pos);
        }
    }
}

pub fn move_cursor_right(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        if *cursor_pos < buffer.len() {
            *cursor_pos = next_boundary(buffer, *cursor_pos);
        }
    }
}

pub fn move_cursor_home(app: &mut AppState) {
    if let AppMode::Editing { cursor_pos, .. } = &mut app.mode {
        *cursor_pos = 0;
    }
}

pub fn move_cursor_end(app: &mut AppState) {
    if let AppMode::Editing { buffer, cursor_pos } = &mut app.mode {
        *cursor_pos = buffer.len();
    }
}

/// Commits the buffer through the store's sanitizing update, then returns to
/// navigation. The store never sees intermediate keystrokes.
pub fn confirm_edit(app: &mut AppState) {
    let buffer = match &app.mode {
        AppMode::Editing { buffer, .. } => buffer.clone(),
        _ => return,
    };

    if let Some(selected) = app.store.selected() {
        app.store.update_text(selected, &buffer);
        app.mark_dirty();
    }
    app.mode = AppMode::Navigating;
}

/// Discards the buffer without touching the store.
pub fn cancel_edit(app: &mut AppState) {
    if matches!(app.mode, AppMode::Editing { .. }) {
        app.mode = AppMode::Navigating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn editing_app() -> AppState {
        let mut app = AppState::new(AppConfig::default());
        start_edit(&mut app);
        app
    }

    fn buffer_of(app: &AppState) -> (&str, usize) {
        match &app.mode {
            AppMode::Editing { buffer, cursor_pos } => (buffer.as_str(), *cursor_pos),
            other => panic!("expected editing mode, got {other:?}"),
        }
    }

    #[test]
    fn test_start_edit_seeds_buffer() {
        let app = editing_app();
        let (buffer, cursor) = buffer_of(&app);
        assert_eq!(buffer, "New Node");
        assert_eq!(cursor, buffer.len());
    }

    #[test]
    fn test_start_edit_without_selection_is_noop() {
        let mut app = AppState::new(AppConfig::default());
        app.store.select(None);
        start_edit(&mut app);
        assert_eq!(app.mode, AppMode::Navigating);
    }

    #[test]
    fn test_type_and_backspace() {
        let mut app = editing_app();
        move_cursor_home(&mut app);
        type_char(&mut app, 'A');
        type_char(&mut app, 'B');
        backspace(&mut app);
        let (buffer, cursor) = buffer_of(&app);
        assert_eq!(buffer, "ANew Node");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut app = editing_app();
        move_cursor_home(&mut app);
        type_char(&mut app, 'é');
        let (_, cursor) = buffer_of(&app);
        assert_eq!(cursor, 'é'.len_utf8());
        move_cursor_left(&mut app);
        let (_, cursor) = buffer_of(&app);
        assert_eq!(cursor, 0);
        delete_char(&mut app);
        let (buffer, _) = buffer_of(&app);
        assert_eq!(buffer, "New Node");
    }

    #[test]
    fn test_insert_newline_keeps_editing() {
        let mut app = editing_app();
        insert_newline(&mut app);
        type_char(&mut app, 'x');
        let (buffer, _) = buffer_of(&app);
        assert_eq!(buffer, "New Node\nx");
        assert!(matches!(app.mode, AppMode::Editing { .. }));
    }

    #[test]
    fn test_confirm_commits_sanitized_text() {
        let mut app = editing_app();
        let root = app.store.root().unwrap();
        app.mode = AppMode::Editing {
            buffer: "<b>hi</b>".to_string(),
            cursor_pos: 0,
        };
        confirm_edit(&mut app);
        assert_eq!(app.store.get(root).unwrap().text, "bhi/b");
        assert_eq!(app.mode, AppMode::Navigating);
        assert!(app.is_dirty);
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut app = editing_app();
        let root = app.store.root().unwrap();
        type_char(&mut app, '!');
        cancel_edit(&mut app);
        assert_eq!(app.store.get(root).unwrap().text, "New Node");
        assert_eq!(app.mode, AppMode::Navigating);
        assert!(!app.is_dirty);
    }

    #[test]
    fn test_empty_buffer_operations_do_not_panic() {
        let mut app = editing_app();
        app.mode = AppMode::Editing {
            buffer: String::new(),
            cursor_pos: 0,
        };
        backspace(&mut app);
        delete_char(&mut app);
        move_cursor_left(&mut app);
        move_cursor_right(&mut app);
        let (buffer, cursor) = buffer_of(&app);
        assert_eq!(buffer, "");
        assert_eq!(cursor, 0);
    }
}
