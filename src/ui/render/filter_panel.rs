use super::Frame;
use crate::filter::{FilterCategory, FilterValue};
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

const BLOCK_TITLE: &str = "Filters";

/// Render the facet panel: one checkbox line per value, grouped under a
/// header per category, with the number of catalog projects carrying it.
///
pub fn filter_panel(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = state.current_focus() == Focus::Filters;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    } else {
        block = block.title(BLOCK_TITLE);
    }

    let mut items = vec![];
    let mut cursor_row = None;
    let mut value_index = 0;
    for category in FilterCategory::ALL {
        items.push(ListItem::new(Line::from(Span::styled(
            category.label(),
            styling::active_block_title_style(),
        ))));
        for value in category.values() {
            if value_index == state.filter_cursor() {
                cursor_row = Some(items.len());
            }
            items.push(checkbox(value, state));
            value_index += 1;
        }
    }
    debug_assert_eq!(value_index, FilterValue::all().len());

    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style(theme))
        .highlight_style(if focused {
            styling::active_list_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        });

    let mut list_state = ListState::default();
    list_state.select(cursor_row);
    frame.render_stateful_widget(list, size, &mut list_state);
}

fn checkbox<'a>(value: FilterValue, state: &State) -> ListItem<'a> {
    let theme = state.get_theme();
    let selected = state.store().active_filters().contains(value);
    let count = state.store().catalog_count(value);
    let style = if selected {
        styling::selected_filter_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    ListItem::new(Line::from(vec![
        Span::styled(if selected { " [x] " } else { " [ ] " }, style),
        Span::styled(format!("{} {}", value.icon(), value.label()), style),
        Span::styled(format!(" ({})", count), styling::muted_text_style(theme)),
    ]))
}
