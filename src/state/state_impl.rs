use crate::catalog::{Catalog, Project};
use crate::filter::{
    FilterBarController, FilterStore, FilterValue, Location, Theme as ProjectTheme,
    DEFAULT_SEARCH_DEBOUNCE,
};
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

use super::navigation::{Focus, View};

/// Houses data representative of the listing page.
///
pub struct State {
    store: FilterStore,
    controller: FilterBarController,
    theme: Theme,
    theme_changed: bool,
    focus: Focus,
    view_stack: Vec<View>,
    results_list_state: ListState,
    filter_panel_open: bool,
    filter_cursor: usize,
    show_log: bool,
    status_message: Option<String>,
    terminal_size: Rect,
}

impl Default for State {
    fn default() -> State {
        State::new(
            Catalog::default(),
            DEFAULT_SEARCH_DEBOUNCE,
            Location::default(),
            Theme::default(),
        )
    }
}

impl State {
    /// Return a new page over the catalog, starting at the given location.
    /// The store is not hydrated until `mount` is called.
    ///
    pub fn new(catalog: Catalog, debounce: Duration, location: Location, theme: Theme) -> Self {
        let mut results_list_state = ListState::default();
        if !catalog.is_empty() {
            results_list_state.select(Some(0));
        }
        State {
            store: FilterStore::new(catalog),
            controller: FilterBarController::new(debounce, location),
            theme,
            theme_changed: false,
            focus: Focus::Results,
            view_stack: vec![View::Projects],
            results_list_state,
            filter_panel_open: false,
            filter_cursor: 0,
            show_log: false,
            status_message: None,
            terminal_size: Rect::default(),
        }
    }

    /// Hydrate the filters from the start-up location.
    ///
    pub fn mount(&mut self) -> &mut Self {
        if self.controller.mount(&mut self.store) {
            self.clamp_selection();
        }
        self
    }

    /// Advance time-driven work; currently the search debounce.
    ///
    pub fn tick(&mut self, now: Instant) -> &mut Self {
        if self.controller.tick(&mut self.store, now) {
            self.clamp_selection();
        }
        self
    }

    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    pub fn controller(&self) -> &FilterBarController {
        &self.controller
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next colour theme and remember that it changed.
    ///
    pub fn cycle_theme(&mut self) -> &mut Self {
        self.theme = self.theme.next();
        self.theme_changed = true;
        info!("Switched to theme {}", self.theme.name);
        self
    }

    /// Return the theme name if it changed since the last call.
    ///
    pub fn take_theme_change(&mut self) -> Option<String> {
        if self.theme_changed {
            self.theme_changed = false;
            Some(self.theme.name.clone())
        } else {
            None
        }
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    pub fn current_view(&self) -> View {
        self.view_stack.last().copied().unwrap_or(View::Projects)
    }

    pub fn is_search_mode(&self) -> bool {
        self.focus == Focus::Search
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.focus = Focus::Search;
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.focus = Focus::Results;
        self
    }

    pub fn add_search_char(&mut self, c: char, now: Instant) -> &mut Self {
        self.controller.push_search_char(c, now);
        self
    }

    pub fn backspace_search(&mut self, now: Instant) -> &mut Self {
        self.controller.pop_search_char(now);
        self
    }

    /// Apply the search text now and hand focus back to the results.
    ///
    pub fn submit_search(&mut self) -> &mut Self {
        self.controller.flush_search(&mut self.store);
        self.clamp_selection();
        self.focus = Focus::Results;
        self
    }

    pub fn get_search_text(&self) -> &str {
        self.controller.search_text()
    }

    pub fn is_filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }

    /// Open or close the facet panel, moving focus with it.
    ///
    pub fn toggle_filter_panel(&mut self) -> &mut Self {
        self.filter_panel_open = !self.filter_panel_open;
        self.focus = if self.filter_panel_open {
            Focus::Filters
        } else {
            Focus::Results
        };
        self
    }

    pub fn filter_cursor(&self) -> usize {
        self.filter_cursor
    }

    pub fn next_filter(&mut self) -> &mut Self {
        let len = FilterValue::all().len();
        self.filter_cursor = (self.filter_cursor + 1) % len;
        self
    }

    pub fn previous_filter(&mut self) -> &mut Self {
        let len = FilterValue::all().len();
        self.filter_cursor = (self.filter_cursor + len - 1) % len;
        self
    }

    /// Toggle the facet value under the panel cursor.
    ///
    pub fn toggle_current_filter(&mut self) -> &mut Self {
        if let Some(value) = FilterValue::all().get(self.filter_cursor).copied() {
            self.toggle_filter(value);
        }
        self
    }

    pub fn toggle_filter(&mut self, value: FilterValue) -> &mut Self {
        self.controller.toggle_filter(value, &mut self.store);
        self.clamp_selection();
        self
    }

    pub fn select_theme(&mut self, theme: ProjectTheme) -> &mut Self {
        self.controller.select_theme(theme, &mut self.store);
        self.clamp_selection();
        self
    }

    pub fn active_filter_count(&self) -> usize {
        self.controller.active_filter_count(&self.store)
    }

    pub fn can_clear(&self) -> bool {
        self.controller.can_clear(&self.store)
    }

    /// Clear every filter and the search text. Does nothing when there is
    /// nothing to clear.
    ///
    pub fn clear_all(&mut self) -> &mut Self {
        if !self.can_clear() {
            return self;
        }
        info!("Clearing all filters");
        self.controller.clear_all(&mut self.store);
        self.clamp_selection();
        self
    }

    /// Go back one history entry and restore its filters.
    ///
    pub fn go_back(&mut self) -> &mut Self {
        if self.controller.go_back(&mut self.store) {
            self.clamp_selection();
        } else {
            self.set_status_message("Already at the first page");
        }
        self
    }

    pub fn location(&self) -> &Location {
        self.controller.location()
    }

    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.store.filtered()
    }

    pub fn get_results_list_state(&mut self) -> &mut ListState {
        &mut self.results_list_state
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.results_list_state.selected()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.results_list_state
            .selected()
            .and_then(|i| self.store.filtered_project(i))
    }

    pub fn next_result(&mut self) -> &mut Self {
        let len = self.store.filtered_len();
        if len == 0 {
            return self;
        }
        let next = match self.results_list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.results_list_state.select(Some(next));
        self
    }

    pub fn previous_result(&mut self) -> &mut Self {
        let len = self.store.filtered_len();
        if len == 0 {
            return self;
        }
        let previous = match self.results_list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.results_list_state.select(Some(previous));
        self
    }

    /// Open the detail card for the selected project.
    ///
    pub fn open_detail(&mut self) -> &mut Self {
        if let Some(project) = self.selected_project() {
            debug!("Opening project {}", project.id);
            self.view_stack.push(View::ProjectDetail);
        }
        self
    }

    pub fn close_detail(&mut self) -> &mut Self {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
        }
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn set_status_message(&mut self, message: &str) -> &mut Self {
        self.status_message = Some(message.to_string());
        self
    }

    pub fn take_status_message(&mut self) -> Option<String> {
        self.status_message.take()
    }

    pub fn get_status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Keep the list selection inside the filtered results.
    ///
    fn clamp_selection(&mut self) {
        let len = self.store.filtered_len();
        if len == 0 {
            self.results_list_state.select(None);
            if self.current_view() == View::ProjectDetail {
                self.close_detail();
            }
            return;
        }
        match self.results_list_state.selected() {
            Some(i) if i < len => {}
            _ => self.results_list_state.select(Some(0)),
        }
    }
}
