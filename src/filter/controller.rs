//! Filter bar controller.
//!
//! Sits between raw input events and the `FilterStore`: echoes search input
//! immediately, applies it to the store only after the debounce quiet period,
//! and mirrors the store's query string into the navigation history.

use super::debounce::Debouncer;
use super::facet::{FilterValue, Theme};
use super::location::{History, Location};
use super::query;
use super::store::FilterStore;
use log::*;
use std::time::{Duration, Instant};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Owns the pending search text, the search debounce and URL
/// synchronization for one listing page.
///
#[derive(Debug, Clone)]
pub struct FilterBarController {
    search_text: String,
    debouncer: Debouncer<String>,
    history: History,
    synced_query: String,
    mounted: bool,
}

impl FilterBarController {
    /// Return a controller whose history starts at the incoming location.
    ///
    pub fn new(debounce: Duration, initial: Location) -> Self {
        FilterBarController {
            search_text: String::new(),
            debouncer: Debouncer::new(debounce),
            history: History::new(initial),
            synced_query: String::new(),
            mounted: false,
        }
    }

    /// Hydrate the store from the current location. Only the first call has
    /// any effect; returns whether this call hydrated.
    ///
    pub fn mount(&mut self, store: &mut FilterStore) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        let filters = query::decode(self.history.current().query());
        info!(
            "Hydrating {} filters from {}",
            filters.count(),
            self.history.current()
        );
        self.synced_query = query::encode(&filters);
        store.set_active_filters(filters);
        true
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Replace the search text and re-arm the debounce.
    ///
    pub fn on_search_input(&mut self, text: &str, now: Instant) {
        self.search_text = text.to_string();
        self.debouncer.schedule(self.search_text.clone(), now);
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        self.search_text.push(c);
        self.debouncer.schedule(self.search_text.clone(), now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        if self.search_text.pop().is_some() {
            self.debouncer.schedule(self.search_text.clone(), now);
        }
    }

    /// Apply the pending search if its quiet period is over. Returns true if
    /// the store was refiltered.
    ///
    pub fn tick(&mut self, store: &mut FilterStore, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => {
                store.on_filter_project(&text);
                true
            }
            None => false,
        }
    }

    /// Apply the current search text immediately, skipping the debounce.
    ///
    pub fn flush_search(&mut self, store: &mut FilterStore) {
        if self.debouncer.cancel().is_some() {
            store.on_filter_project(&self.search_text);
        }
    }

    pub fn toggle_filter(&mut self, value: FilterValue, store: &mut FilterStore) {
        store.toggle_filter(value, &self.search_text);
        self.sync_url(store);
    }

    pub fn select_theme(&mut self, theme: Theme, store: &mut FilterStore) {
        store.on_select_theme(theme, &self.search_text);
        self.sync_url(store);
    }

    /// Drop every selection and the search text.
    ///
    pub fn clear_all(&mut self, store: &mut FilterStore) {
        self.debouncer.cancel();
        self.search_text.clear();
        store.clear_all();
        self.sync_url(store);
    }

    /// Step back through the history and re-hydrate the store from the
    /// restored location. Returns false at the first entry.
    ///
    pub fn go_back(&mut self, store: &mut FilterStore) -> bool {
        let filters = match self.history.back() {
            Some(location) => query::decode(location.query()),
            None => return false,
        };
        debug!("Restoring {} filters from history", filters.count());
        self.synced_query = query::encode(&filters);
        store.set_active_filters(filters);
        store.on_filter_project(&self.search_text);
        true
    }

    /// Total selected values across every category.
    ///
    pub fn active_filter_count(&self, store: &FilterStore) -> usize {
        store.active_filter_count()
    }

    /// Whether "clear all" has anything to clear.
    ///
    pub fn can_clear(&self, store: &FilterStore) -> bool {
        store.active_filter_count() > 0 || !self.search_text.is_empty()
    }

    fn sync_url(&mut self, store: &FilterStore) {
        if store.query_string() == self.synced_query {
            return;
        }
        self.synced_query = store.query_string().to_string();
        self.history.push(Location::projects(&self.synced_query));
    }
}

impl Default for FilterBarController {
    fn default() -> Self {
        FilterBarController::new(DEFAULT_SEARCH_DEBOUNCE, Location::default())
    }
}
