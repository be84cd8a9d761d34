mod editing;
mod file;
mod movement;
mod node;
mod view;

use crate::app::AppState;
use anyhow::Result;

pub use editing::*;
pub use file::*;
pub use movement::*;
pub use node::*;
pub use view::*;

/// The closed set of logical commands. Binding physical keys and mouse
/// gestures to these lives in `event.rs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    // Application control
    Quit,
    ForceQuit,

    // Structure
    CreateChild,
    CreateSibling,
    DeleteNode,

    // Navigation
    GoUp,
    GoDown,
    GoLeft,
    GoRight,
    ClearSelection,

    // Editing
    StartEdit,
    TypeChar(char),
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertNewline,
    ConfirmEdit,
    CancelEdit,

    // View
    SwitchLayout,
    ToggleCollapse,
    BeginPan(u16, u16),
    PanMove(u16, u16),
    EndPan,

    // File operations
    Save,
    ExportText,

    // Help
    ShowHelp,
    CloseHelp,
}

/// Executes one command against the app state, then refreshes the derived
/// positions in the same tick. A failed precondition anywhere below is a
/// silent no-op, never an error.
pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    match action {
        Action::Quit => {
            if app.is_dirty {
                app.set_message("Unsaved changes! Press Shift+Q to force quit or 's' to save");
            } else {
                app.running = false;
            }
        }
        Action::ForceQuit => {
            app.running = false;
        }

        // Structure
        Action::CreateChild => node::create_child(app),
        Action::CreateSibling => node::create_sibling(app),
        Action::DeleteNode => node::delete_selected(app),

        // Navigation
        Action::GoUp => movement::go_up(app),
        Action::GoDown => movement::go_down(app),
        Action::GoLeft => movement::go_left(app),
        Action::GoRight => movement::go_right(app),
        Action::ClearSelection => movement::clear_selection(app),

        // Editing
        Action::StartEdit => editing::start_edit(app),
        Action::TypeChar(c) => editing::type_char(app, c),
        Action::Backspace => editing::backspace(app),
        Action::DeleteChar => editing::delete_char(app),
        Action::MoveCursorLeft => editing::move_cursor_left(app),
        Action::MoveCursorRight => editing::move_cursor_right(app),
        Action::MoveCursorHome => editing::move_cursor_home(app),
        Action::MoveCursorEnd => editing::move_cursor_end(app),
        Action::InsertNewline => editing::insert_newline(app),
        Action::ConfirmEdit => editing::confirm_edit(app),
        Action::CancelEdit => editing::cancel_edit(app),

        // View
        Action::SwitchLayout => view::switch_layout(app),
        Action::ToggleCollapse => view::toggle_collapse(app),
        Action::BeginPan(x, y) => view::begin_pan(app, x, y),
        Action::PanMove(x, y) => view::pan_move(app, x, y),
        Action::EndPan => view::end_pan(app),

        // File operations
        Action::Save => file::save(app)?,
        Action::ExportText => file::export_text(app)?,

        // Help
        Action::ShowHelp => view::show_help(app),
        Action::CloseHelp => view::close_help(app),
    }

    // Mutation and relayout happen back to back on the same event tick, so
    // the renderer never observes a tree with stale positions.
    app.relayout();
    Ok(())
}
