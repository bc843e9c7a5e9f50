use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the result count and the current page location.
///
pub fn result_bar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let shown = state.store().filtered_len();
    let total = state.store().catalog().len();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(size);

    let count = Line::from(vec![
        Span::styled(" Showing ", styling::muted_text_style(theme)),
        Span::styled(shown.to_string(), styling::active_list_item_style(theme)),
        Span::styled(
            format!(" of {} projects", total),
            styling::muted_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(count), columns[0]);

    let location = Paragraph::new(Line::from(Span::styled(
        format!("{} ", state.location()),
        styling::normal_text_style(theme),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(location, columns[1]);
}
