use crate::app::{AppMode, AppState};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &AppState, area: Rect) {
    let mode = match &app.mode {
        AppMode::Navigating => "NAV",
        AppMode::Editing { .. } => "EDIT",
        AppMode::Panning { .. } => "PAN",
        AppMode::Help => "HELP",
    };
    let dirty = if app.is_dirty { " *" } else { "" };
    let mut text = format!(
        " {mode} | layout: {} | {} nodes{dirty}",
        app.layout_mode,
        app.store.len()
    );
    if let Some(message) = &app.message {
        text.push_str(" | ");
        text.push_str(message);
    }

    let style = Style::default().fg(Color::Black).bg(Color::Gray);
    frame.render_widget(Paragraph::new(text).style(style), area);
}
