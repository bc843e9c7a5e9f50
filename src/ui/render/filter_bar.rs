use super::Frame;
use crate::filter::{FilterValue, Theme as ProjectTheme};
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Explore projects";

/// Render the filter bar: search box, filter badge, clear hint and the
/// theme buttons.
///
pub fn filter_bar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let searching = state.current_focus() == Focus::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()))
        .border_style(if searching {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        });
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

    // Search input with a trailing cursor while focused
    let search_text = state.get_search_text();
    let mut search = vec![Span::styled("Search: ", styling::muted_text_style(theme))];
    if search_text.is_empty() && !searching {
        search.push(Span::styled(
            "press / to search by name or summary",
            styling::muted_text_style(theme),
        ));
    } else {
        search.push(Span::styled(search_text, styling::normal_text_style(theme)));
        if searching {
            search.push(Span::styled("█", styling::active_list_item_style(theme)));
        }
    }
    if state.controller().is_search_pending() {
        search.push(Span::styled(" …", styling::muted_text_style(theme)));
    }
    frame.render_widget(Paragraph::new(Line::from(search)), rows[0]);

    // Filter toggle with badge, then clear-all hint
    let count = state.active_filter_count();
    let mut controls = vec![Span::styled("f: filters ", styling::normal_text_style(theme))];
    if count > 0 {
        controls.push(Span::styled(format!(" {} ", count), styling::badge_style(theme)));
    }
    controls.push(Span::raw("   "));
    let clear_style = if state.can_clear() {
        styling::normal_text_style(theme)
    } else {
        styling::muted_text_style(theme)
    };
    controls.push(Span::styled("c: clear all", clear_style));
    frame.render_widget(Paragraph::new(Line::from(controls)), rows[1]);

    // Theme buttons
    let active = state.store().active_filters();
    let mut buttons = vec![];
    for (i, project_theme) in ProjectTheme::ALL.iter().enumerate() {
        let selected = active.contains(FilterValue::Theme(*project_theme));
        let style = if selected {
            styling::selected_filter_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        let label = format!(
            "{}[{} {} {}]",
            if selected { "▸" } else { " " },
            i + 1,
            project_theme.icon(),
            project_theme.label()
        );
        buttons.push(Span::styled(label, style));
        buttons.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(buttons)), rows[2]);
}
