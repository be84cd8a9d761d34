use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab", "create child"),
    ("Enter", "create sibling"),
    ("e / F2", "edit label"),
    ("Enter (editing)", "commit edit"),
    ("Shift+Enter (editing)", "insert newline"),
    ("Esc (editing)", "cancel edit"),
    ("d / Del", "delete subtree"),
    ("arrows / hjkl", "move selection"),
    ("Esc", "clear selection"),
    ("t", "switch layout"),
    ("Space", "toggle collapse flag"),
    ("mouse drag", "pan"),
    ("s", "save"),
    ("x", "export text outline"),
    ("q", "quit"),
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let height = (BINDINGS.len() as u16 + 2).min(area.height);
    let width = 44.min(area.width);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, what)| Line::from(format!(" {key:<22} {what}")))
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .block(Block::default().borders(Borders::ALL).title(" Help ")),
        popup,
    );
}
