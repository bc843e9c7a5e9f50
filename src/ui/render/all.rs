use super::*;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

const FILTER_BAR_HEIGHT: u16 = 6;
const RESULT_BAR_HEIGHT: u16 = 1;
const LOG_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 1;
const FILTER_PANEL_WIDTH: u16 = 34;

/// Render the whole page according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![
        Constraint::Length(FILTER_BAR_HEIGHT),
        Constraint::Length(RESULT_BAR_HEIGHT),
        Constraint::Min(5),
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    filter_bar(frame, rows[0], state);
    result_bar(frame, rows[1], state);

    let body = if state.is_filter_panel_open() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(20)])
            .split(rows[2]);
        filter_panel(frame, columns[0], state);
        columns[1]
    } else {
        rows[2]
    };

    match state.current_view() {
        View::Projects => project_list(frame, body, state),
        View::ProjectDetail => project_card(frame, body, state),
    }

    if state.is_log_visible() {
        log(frame, rows[3], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}
