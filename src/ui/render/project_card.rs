use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the detail card of the selected project.
///
pub fn project_card(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let project = match state.selected_project() {
        Some(project) => project,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(size);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            project.name.as_str(),
            styling::active_list_item_style(theme).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} {}", project.tags.status.icon(), project.tags.status.label()),
            styling::muted_text_style(theme),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title("Project - Esc: back"),
    );
    frame.render_widget(header, chunks[0]);

    let label = styling::muted_text_style(theme);
    let mut lines = vec![
        Line::from(Span::styled(project.tldr.as_str(), styling::normal_text_style(theme))),
        Line::from(""),
    ];
    if let Some(description) = &project.description {
        lines.push(Line::from(description.as_str()));
        lines.push(Line::from(""));
    }

    let themes: Vec<String> = project
        .tags
        .themes
        .iter()
        .map(|t| format!("{} {}", t.icon(), t.label()))
        .collect();
    lines.push(Line::from(vec![
        Span::styled("Themes: ", label),
        Span::raw(themes.join(", ")),
    ]));
    let types: Vec<String> = project
        .tags
        .types
        .iter()
        .map(|t| format!("{} {}", t.icon(), t.label()))
        .collect();
    lines.push(Line::from(vec![
        Span::styled("Type:   ", label),
        Span::raw(types.join(", ")),
    ]));
    if let Some(banner) = &project.banner {
        lines.push(Line::from(vec![
            Span::styled("Banner: ", label),
            Span::raw(banner.as_str()),
        ]));
    }

    if !project.links.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Links", styling::active_block_title_style())));
        for (kind, url) in &project.links {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} {:<9}", kind.icon(), kind.label()), label),
                Span::raw(url.as_str()),
            ]));
        }
    }

    let body = Paragraph::new(lines)
        .style(styling::normal_text_style(theme))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(body, chunks[1]);
}
