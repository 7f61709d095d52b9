/*
[INPUT]:  TUI app state and the form context
[OUTPUT]: Frame rendering for the add-task screen
[POS]:    TUI UI module root
[UPDATE]: When adding panels beside the form
*/

mod form;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub(in crate::tui) use form::draw_ui;

/// Rect of `percent_x` by `percent_y` centered in `area`
pub(in crate::tui) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
