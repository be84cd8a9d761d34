use crate::app::{AppMode, AppState};
use crate::layout::Position;
use crate::model::NodeId;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// World units per terminal cell. Horizontal matches the layout's
/// width-per-char so a label fits its node box.
pub const WORLD_PER_CELL_X: f64 = 8.0;
pub const WORLD_PER_CELL_Y: f64 = 35.0;

const VISIBLE_MARGIN_CELLS: f64 = 2.0;

pub fn draw(frame: &mut Frame, app: &mut AppState, area: Rect) {
    // A drag owns the viewport; auto-scroll would undo it mid-gesture.
    if !matches!(app.mode, AppMode::Panning { .. }) {
        ensure_selected_visible(app, area);
    }
    draw_connectors(frame, app, area);
    draw_nodes(frame, app, area);
}

fn cell_of(app: &AppState, area: Rect, wx: f64, wy: f64) -> (i64, i64) {
    let col = ((wx - app.viewport_x) / WORLD_PER_CELL_X).round() as i64 + area.x as i64;
    let row = ((wy - app.viewport_y) / WORLD_PER_CELL_Y).round() as i64 + area.y as i64;
    (col, row)
}

/// Scrolls the viewport just enough to keep the selected node on screen.
fn ensure_selected_visible(app: &mut AppState, area: Rect) {
    let Some(selected) = app.store.selected() else {
        return;
    };
    let Some(pos) = app.positions.get(&selected) else {
        return;
    };

    let margin_x = VISIBLE_MARGIN_CELLS * WORLD_PER_CELL_X;
    let margin_y = VISIBLE_MARGIN_CELLS * WORLD_PER_CELL_Y;
    let view_w = area.width as f64 * WORLD_PER_CELL_X;
    let view_h = area.height as f64 * WORLD_PER_CELL_Y;

    let left = pos.x - pos.width / 2.0;
    let right = pos.x + pos.width / 2.0;
    let top = pos.y - pos.height / 2.0;
    let bottom = pos.y + pos.height / 2.0;

    if left < app.viewport_x + margin_x {
        app.viewport_x = left - margin_x;
    } else if right > app.viewport_x + view_w - margin_x {
        app.viewport_x = right - view_w + margin_x;
    }
    if top < app.viewport_y + margin_y {
        app.viewport_y = top - margin_y;
    } else if bottom > app.viewport_y + view_h - margin_y {
        app.viewport_y = bottom - view_h + margin_y;
    }
}

/// Draws an elbow from each node to its parent: horizontal run at the
/// parent's row, then vertical down/up to the child.
fn draw_connectors(frame: &mut Frame, app: &AppState, area: Rect) {
    let buf = frame.buffer_mut();
    let connectors: Vec<(Position, Position)> = app
        .store
        .iter()
        .filter_map(|(id, node)| {
            let parent = node.parent?;
            Some((*app.positions.get(&parent)?, *app.positions.get(&id)?))
        })
        .collect();

    for (parent_pos, child_pos) in connectors {
        let (px, py) = cell_of(app, area, parent_pos.x, parent_pos.y);
        let (cx, cy) = cell_of(app, area, child_pos.x, child_pos.y);

        for col in px.min(cx)..=px.max(cx) {
            put(buf, area, col, py, "─");
        }
        for row in py.min(cy)..=py.max(cy) {
            put(buf, area, cx, row, "│");
        }
    }
}

fn put(buf: &mut ratatui::buffer::Buffer, area: Rect, col: i64, row: i64, symbol: &str) {
    if col < area.x as i64
        || row < area.y as i64
        || col >= (area.x + area.width) as i64
        || row >= (area.y + area.height) as i64
    {
        return;
    }
    if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
        cell.set_symbol(symbol);
    }
}

fn draw_nodes(frame: &mut Frame, app: &AppState, area: Rect) {
    // Stable paint order so overlaps resolve the same way every frame.
    let mut ids: Vec<NodeId> = app.positions.keys().copied().collect();
    ids.sort();

    for id in ids {
        let pos = app.positions[&id];
        let is_selected = app.store.selected() == Some(id);

        // While editing, the selected node shows the in-progress buffer.
        let label = match (&app.mode, is_selected) {
            (AppMode::Editing { buffer, .. }, true) => buffer.clone(),
            _ => app
                .store
                .get(id)
                .map(|n| n.text.clone())
                .unwrap_or_default(),
        };
        let line = label.lines().next().unwrap_or("").to_string();

        let width_cells = ((pos.width / WORLD_PER_CELL_X).ceil() as u16).max(1);
        let (col, row) = cell_of(app, area, pos.x - pos.width / 2.0, pos.y);
        if row < area.y as i64 || row >= (area.y + area.height) as i64 {
            continue;
        }
        if col >= (area.x + area.width) as i64 || col + width_cells as i64 <= area.x as i64 {
            continue;
        }

        let clipped_x = col.max(area.x as i64) as u16;
        let clipped_w = ((col + width_cells as i64).min((area.x + area.width) as i64)
            - clipped_x as i64) as u16;
        let rect = Rect::new(clipped_x, row as u16, clipped_w, 1);

        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        frame.render_widget(Paragraph::new(line).style(style), rect);
    }
}
