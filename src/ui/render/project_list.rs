use super::Frame;
use crate::catalog::Project;
use crate::state::{Focus, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Projects";
const NO_RESULTS: &str = "No projects match the selected filters";

/// Render the filtered projects as a list of two-line cards.
///
pub fn project_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = state.current_focus() == Focus::Results;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    let highlight;
    if focused {
        highlight = styling::active_list_item_style(&theme);
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    } else {
        highlight = styling::current_list_item_style(&theme);
        block = block.title(BLOCK_TITLE);
    }

    let projects = state.filtered_projects();
    let items: Vec<ListItem> = if projects.is_empty() {
        vec![ListItem::new(Span::styled(
            NO_RESULTS,
            styling::muted_text_style(&theme),
        ))]
    } else {
        projects.iter().map(|p| card(p, &theme)).collect()
    };

    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(highlight)
        .highlight_symbol("▌")
        .block(block);

    frame.render_stateful_widget(list, size, state.get_results_list_state());
}

fn card(project: &Project, theme: &Theme) -> ListItem<'static> {
    let mut header = vec![Span::raw(project.name.clone()), Span::raw("  ")];
    for project_theme in &project.tags.themes {
        header.push(Span::styled(
            format!("{} ", project_theme.icon()),
            styling::selected_filter_style(theme),
        ));
    }
    header.push(Span::styled(
        format!(
            "{} {}",
            project.tags.status.icon(),
            project.tags.status.label()
        ),
        styling::muted_text_style(theme),
    ));

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(
            format!("  {}", project.tldr),
            styling::muted_text_style(theme),
        )),
    ])
}
