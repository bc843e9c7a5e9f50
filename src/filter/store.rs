//! Filter state store.
//!
//! Single source of truth for the active selections, the filtered view of the
//! catalog and the query string derived from the selections.

use super::facet::{FilterCategory, FilterValue, Theme};
use super::query;
use super::selection::ActiveFilters;
use crate::catalog::{Catalog, Project};
use log::*;

/// Houses the active filters and everything derived from them.
///
#[derive(Clone, Debug)]
pub struct FilterStore {
    catalog: Catalog,
    active_filters: ActiveFilters,
    filtered: Vec<usize>,
    query_string: String,
}

impl FilterStore {
    /// Return a new store with no selections over the given catalog.
    ///
    pub fn new(catalog: Catalog) -> FilterStore {
        let filtered = (0..catalog.len()).collect();
        FilterStore {
            catalog,
            active_filters: ActiveFilters::new(),
            filtered,
            query_string: String::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.active_filters
    }

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Projects passing the current filters, in catalog order.
    ///
    pub fn filtered(&self) -> Vec<&Project> {
        self.filtered
            .iter()
            .filter_map(|i| self.catalog.get(*i))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_project(&self, index: usize) -> Option<&Project> {
        self.filtered.get(index).and_then(|i| self.catalog.get(*i))
    }

    pub fn active_filter_count(&self) -> usize {
        self.active_filters.count()
    }

    /// Number of catalog projects carrying the value, ignoring selections.
    ///
    pub fn catalog_count(&self, value: FilterValue) -> usize {
        self.catalog
            .projects()
            .iter()
            .filter(|p| p.has_tag(value))
            .count()
    }

    /// Flip the value's membership, then refilter with the search text and
    /// re-derive the query string.
    ///
    pub fn toggle_filter(&mut self, value: FilterValue, search_query: &str) -> &mut Self {
        let selected = self.active_filters.toggle(value);
        debug!(
            "Filter {} {}",
            value,
            if selected { "selected" } else { "deselected" }
        );
        self.refilter(search_query);
        self.query_string = query::encode(&self.active_filters);
        self
    }

    /// String-keyed variant of `toggle_filter`. Unknown categories or values
    /// leave the store untouched.
    ///
    pub fn toggle_filter_key(
        &mut self,
        category_key: &str,
        value_key: &str,
        search_query: &str,
    ) -> &mut Self {
        let value = FilterCategory::from_key(category_key)
            .and_then(|category| FilterValue::parse(category, value_key));
        match value {
            Some(value) => self.toggle_filter(value, search_query),
            None => {
                debug!("Ignoring toggle of unknown filter {}={}", category_key, value_key);
                self
            }
        }
    }

    /// Toggle entry point for the theme button row.
    ///
    pub fn on_select_theme(&mut self, theme: Theme, search_query: &str) -> &mut Self {
        self.toggle_filter(FilterValue::Theme(theme), search_query)
    }

    /// Refilter with the given search text. Selections and query string are
    /// left as they are.
    ///
    pub fn on_filter_project(&mut self, search_text: &str) -> &mut Self {
        self.refilter(search_text);
        debug!(
            "Search '{}' matched {} of {} projects",
            search_text.trim(),
            self.filtered.len(),
            self.catalog.len()
        );
        self
    }

    /// Reset selections, show the whole catalog and drop the query string.
    ///
    pub fn clear_all(&mut self) -> &mut Self {
        self.active_filters.clear();
        self.filtered = (0..self.catalog.len()).collect();
        self.query_string.clear();
        self
    }

    /// Replace the selections wholesale, e.g. when hydrating from a URL. The
    /// query string is not re-derived since the caller's source is already
    /// authoritative.
    ///
    pub fn set_active_filters(&mut self, filters: ActiveFilters) -> &mut Self {
        self.active_filters = filters;
        self.refilter("");
        self
    }

    fn refilter(&mut self, search_text: &str) {
        let term = search_text.trim().to_lowercase();
        self.filtered = self
            .catalog
            .projects()
            .iter()
            .enumerate()
            .filter(|(_, p)| self.active_filters.matches(p) && p.matches_term(&term))
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectTags;
    use crate::filter::{ProjectType, Status};
    use fake::{Fake, Faker};
    use std::collections::BTreeMap;

    fn project(id: &str, name: &str, tldr: &str, themes: Vec<Theme>, status: Status) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            tldr: tldr.to_string(),
            description: None,
            banner: None,
            tags: ProjectTags {
                themes,
                status,
                types: vec![],
            },
            links: BTreeMap::new(),
        }
    }

    fn example_store() -> FilterStore {
        let catalog = Catalog::new(vec![
            project("zkit", "ZKit", "circuits", vec![Theme::Build], Status::Active),
            project(
                "proofs101",
                "Proofs101",
                "a course",
                vec![Theme::Research],
                Status::Active,
            ),
        ])
        .unwrap();
        FilterStore::new(catalog)
    }

    fn names(store: &FilterStore) -> Vec<String> {
        store.filtered().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn new_store_shows_everything() {
        let store = example_store();
        assert_eq!(names(&store), vec!["ZKit", "Proofs101"]);
        assert_eq!(store.query_string(), "");
        assert_eq!(store.active_filter_count(), 0);
    }

    #[test]
    fn theme_then_search_example() {
        let mut store = example_store();
        store.on_select_theme(Theme::Research, "");
        assert_eq!(names(&store), vec!["Proofs101"]);
        assert_eq!(store.query_string(), "themes=research");

        store.on_select_theme(Theme::Research, "");
        store.on_filter_project("kit");
        assert_eq!(names(&store), vec!["ZKit"]);
        assert_eq!(store.query_string(), "");
    }

    #[test]
    fn toggle_uses_supplied_search_text() {
        let mut store = example_store();
        store.toggle_filter(FilterValue::Status(Status::Active), "COURSE");
        assert_eq!(names(&store), vec!["Proofs101"]);
        assert_eq!(store.query_string(), "status=active");
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut store = example_store();
        store.on_select_theme(Theme::Build, "");
        let filters = store.active_filters().clone();
        let query = store.query_string().to_string();

        store.toggle_filter(FilterValue::Type(ProjectType::Devtools), "");
        store.toggle_filter(FilterValue::Type(ProjectType::Devtools), "");
        assert_eq!(store.active_filters(), &filters);
        assert_eq!(store.query_string(), query);
        assert_eq!(names(&store), vec!["ZKit"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut store = example_store();
        store.toggle_filter_key("keywords", "zk", "");
        store.toggle_filter_key("themes", "party", "");
        assert!(store.active_filters().is_empty());
        assert_eq!(store.filtered_len(), 2);

        store.toggle_filter_key("themes", "build", "");
        assert_eq!(names(&store), vec!["ZKit"]);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut store = example_store();
        store.on_select_theme(Theme::Build, "");
        store.toggle_filter(FilterValue::Status(Status::Active), "zk");
        store.clear_all();
        assert!(store.active_filters().is_empty());
        assert_eq!(store.filtered_len(), store.catalog().len());
        assert_eq!(store.query_string(), "");
    }

    #[test]
    fn set_active_filters_keeps_query_string() {
        let mut store = example_store();
        let filters = crate::filter::query::decode("themes=build");
        store.set_active_filters(filters.clone());
        assert_eq!(store.active_filters(), &filters);
        assert_eq!(store.query_string(), "");
        assert_eq!(names(&store), vec!["ZKit"]);
    }

    #[test]
    fn badge_count_ignores_search_text() {
        let mut store = example_store();
        store.on_select_theme(Theme::Build, "");
        store.on_select_theme(Theme::Research, "");
        store.toggle_filter(FilterValue::Status(Status::Active), "nothing matches");
        assert_eq!(store.active_filter_count(), 3);
        assert_eq!(store.filtered_len(), 0);
    }

    #[test]
    fn filtered_result_is_exactly_the_matching_subsequence() {
        let projects: Vec<Project> = (0..40)
            .map(|i| {
                let mut p: Project = Faker.fake();
                p.id = format!("project-{}", i);
                p
            })
            .collect();
        let mut store = FilterStore::new(Catalog::new(projects.clone()).unwrap());
        store.on_select_theme(Theme::Play, "");
        store.toggle_filter(FilterValue::Status(Status::Active), "");
        store.toggle_filter(FilterValue::Status(Status::Archived), "a");

        let expected: Vec<String> = projects
            .iter()
            .filter(|p| {
                p.tags.themes.contains(&Theme::Play)
                    && matches!(p.tags.status, Status::Active | Status::Archived)
                    && (p.name.to_lowercase().contains('a') || p.tldr.to_lowercase().contains('a'))
            })
            .map(|p| p.id.clone())
            .collect();
        let actual: Vec<String> = store.filtered().iter().map(|p| p.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn catalog_count_counts_tags() {
        let store = example_store();
        assert_eq!(store.catalog_count(FilterValue::Status(Status::Active)), 2);
        assert_eq!(store.catalog_count(FilterValue::Theme(Theme::Play)), 0);
    }
}
