pub mod help;
pub mod map;
pub mod status_line;

use crate::app::{AppMode, AppState};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Paints one frame from the `(tree, positions, selection)` triple. The
/// dispatcher relayouts on the same tick as every mutation, so the two maps
/// are always mutually consistent by the time we get here.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let [map_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    map::draw(frame, app, map_area);
    status_line::draw(frame, app, status_area);

    if matches!(app.mode, AppMode::Help) {
        help::draw(frame, map_area);
    }
}
