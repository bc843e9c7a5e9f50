//! Active filter selections.

use super::facet::{FilterCategory, FilterValue};
use crate::catalog::Project;
use std::collections::{BTreeMap, BTreeSet};

/// Set of selected facet values.
///
/// Values are kept in a single ordered set; since `FilterValue` orders by
/// category first and declaration order second, iteration is grouped by
/// category in declaration order.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    selected: BTreeSet<FilterValue>,
}

impl ActiveFilters {
    pub fn new() -> ActiveFilters {
        ActiveFilters::default()
    }

    /// Flip membership of the value. Returns true if it is now selected.
    ///
    pub fn toggle(&mut self, value: FilterValue) -> bool {
        if self.selected.remove(&value) {
            false
        } else {
            self.selected.insert(value);
            true
        }
    }

    pub fn insert(&mut self, value: FilterValue) -> &mut Self {
        self.selected.insert(value);
        self
    }

    pub fn contains(&self, value: FilterValue) -> bool {
        self.selected.contains(&value)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.selected.clear();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Total number of selected values across every category.
    ///
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FilterValue> + '_ {
        self.selected.iter().copied()
    }

    /// Selected values of one category in declaration order.
    ///
    pub fn values_in(&self, category: FilterCategory) -> impl Iterator<Item = FilterValue> + '_ {
        self.selected
            .iter()
            .copied()
            .filter(move |v| v.category() == category)
    }

    /// Selections grouped by category. Categories without selections are
    /// omitted.
    ///
    pub fn by_category(&self) -> BTreeMap<FilterCategory, Vec<FilterValue>> {
        let mut grouped: BTreeMap<FilterCategory, Vec<FilterValue>> = BTreeMap::new();
        for value in &self.selected {
            grouped.entry(value.category()).or_default().push(*value);
        }
        grouped
    }

    /// Return true if the project satisfies every category that has at least
    /// one selection: OR within a category, AND across categories.
    ///
    pub fn matches(&self, project: &Project) -> bool {
        self.by_category()
            .values()
            .all(|values| values.iter().any(|v| project.has_tag(*v)))
    }
}

impl FromIterator<FilterValue> for ActiveFilters {
    fn from_iter<I: IntoIterator<Item = FilterValue>>(iter: I) -> Self {
        ActiveFilters {
            selected: iter.into_iter().collect(),
        }
    }
}
