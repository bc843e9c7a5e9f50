use super::Frame;
use crate::state::{Focus, State, View};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode badge, its colour and the key hints for the current state.
///
fn controls(state: &State, theme: &Theme) -> (&'static str, Style, String) {
    let badge = |color: crate::ui::ColorSpec| {
        Style::default()
            .fg(color.to_color())
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };
    match (state.current_focus(), state.current_view()) {
        (Focus::Search, _) => (
            " SEARCH ",
            badge(theme.footer_search),
            " Type to search, Enter: apply now, Esc: done".to_string(),
        ),
        (Focus::Filters, _) => (
            " FILTERS ",
            badge(theme.footer_filters),
            " j/k: navigate, Space: toggle, c: clear all, f/Esc: close".to_string(),
        ),
        (Focus::Results, View::ProjectDetail) => (
            " PROJECT ",
            badge(theme.footer_normal),
            " Esc: back, y: copy link, q: quit".to_string(),
        ),
        (Focus::Results, View::Projects) => {
            let mut hints = vec![
                "j/k: navigate",
                "Enter: open",
                "/: search",
                "1-3: themes",
                "f: filters",
            ];
            if state.can_clear() {
                hints.push("c: clear all");
            }
            hints.extend(["b: back", "y: copy link", "t: theme", "d: log", "q: quit"]);
            (" PROJECTS ", badge(theme.footer_normal), format!(" {}", hints.join(", ")))
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (mode, mode_style, hints) = controls(state, theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)])
        .split(size);

    let left = Paragraph::new(Line::from(vec![
        Span::styled(mode, mode_style),
        Span::styled(hints, Style::default().fg(theme.text_muted.to_color())),
    ]));
    frame.render_widget(left, columns[0]);

    if let Some(message) = state.get_status_message() {
        let right = Paragraph::new(Span::styled(
            format!("{} ", message),
            Style::default().fg(theme.warning.to_color()),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(right, columns[1]);
    }
}
