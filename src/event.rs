use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

pub fn handle_events(app: &mut AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(10))? {
        match event::read()? {
            Event::Key(key) => return Ok(handle_key_event(app, key)),
            Event::Mouse(mouse) => return Ok(handle_mouse_event(app, mouse)),
            _ => {}
        }
    }
    Ok(None)
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    match &app.mode {
        AppMode::Navigating => handle_navigating_mode(key),
        AppMode::Editing { .. } => handle_editing_mode(key),
        AppMode::Panning { .. } => handle_panning_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_navigating_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Char('Q'), KeyModifiers::SHIFT) => Some(Action::ForceQuit),
        (Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        // Structure
        (Tab, _) => Some(Action::CreateChild),
        (Enter, KeyModifiers::NONE) => Some(Action::CreateSibling),
        (Char('d'), KeyModifiers::NONE) | (Delete, _) => Some(Action::DeleteNode),

        // Editing
        (Char('e'), KeyModifiers::NONE) | (F(2), _) => Some(Action::StartEdit),

        // Navigation
        (Char('h'), KeyModifiers::NONE) | (Left, _) => Some(Action::GoLeft),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::GoDown),
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::GoUp),
        (Char('l'), KeyModifiers::NONE) | (Right, _) => Some(Action::GoRight),
        (Esc, _) => Some(Action::ClearSelection),

        // View
        (Char('t'), KeyModifiers::NONE) => Some(Action::SwitchLayout),
        (Char(' '), KeyModifiers::NONE) => Some(Action::ToggleCollapse),

        // File operations
        (Char('s'), KeyModifiers::NONE) => Some(Action::Save),
        (Char('x'), KeyModifiers::NONE) => Some(Action::ExportText),

        // Help
        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_editing_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Esc, _) => Some(Action::CancelEdit),
        (Enter, KeyModifiers::SHIFT) => Some(Action::InsertNewline),
        (Enter, _) => Some(Action::ConfirmEdit),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Action::TypeChar(c)),

        (Backspace, _) => Some(Action::Backspace),
        (Delete, _) => Some(Action::DeleteChar),

        (Left, KeyModifiers::NONE) => Some(Action::MoveCursorLeft),
        (Right, KeyModifiers::NONE) => Some(Action::MoveCursorRight),
        (Home, _) => Some(Action::MoveCursorHome),
        (End, _) => Some(Action::MoveCursorEnd),
        (Char('a'), KeyModifiers::CONTROL) => Some(Action::MoveCursorHome),
        (Char('e'), KeyModifiers::CONTROL) => Some(Action::MoveCursorEnd),

        _ => None,
    }
}

fn handle_panning_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::EndPan),
        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

fn handle_mouse_event(app: &AppState, mouse: MouseEvent) -> Option<Action> {
    match (&app.mode, mouse.kind) {
        (AppMode::Navigating, MouseEventKind::Down(MouseButton::Left)) => {
            Some(Action::BeginPan(mouse.column, mouse.row))
        }
        (AppMode::Panning { .. }, MouseEventKind::Drag(MouseButton::Left)) => {
            Some(Action::PanMove(mouse.column, mouse.row))
        }
        (AppMode::Panning { .. }, MouseEventKind::Up(MouseButton::Left)) => Some(Action::EndPan),
        _ => None,
    }
}
