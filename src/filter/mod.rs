//! Project filtering module.
//!
//! This module contains everything between user input and the filtered
//! project list:
//! - Facets: the closed set of filter categories and values
//! - Selections and the store that derives the filtered list and query string
//! - Query string codec and page location history
//! - Search debounce and the filter bar controller tying it together

mod controller;
mod debounce;
mod facet;
mod location;
pub mod query;
mod selection;
mod store;

pub use controller::{FilterBarController, DEFAULT_SEARCH_DEBOUNCE};
pub use debounce::Debouncer;
pub use facet::{FilterCategory, FilterValue, ProjectType, Status, Theme};
pub use location::{History, Location, PROJECTS_PATH};
pub use selection::ActiveFilters;
pub use store::FilterStore;
