//! Filter facets.
//!
//! The set of filter categories and the valid values inside each of them is
//! closed: every category and value is an enum variant with a stable key used
//! in query strings and catalog files, a display label, and an icon.

use fake::{Dummy, Faker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifying the filter categories in declaration order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterCategory {
    Themes,
    Status,
    Types,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::Themes,
        FilterCategory::Status,
        FilterCategory::Types,
    ];

    /// Return the query string key for the category.
    ///
    pub fn key(self) -> &'static str {
        match self {
            FilterCategory::Themes => "themes",
            FilterCategory::Status => "status",
            FilterCategory::Types => "types",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterCategory::Themes => "Themes",
            FilterCategory::Status => "Status",
            FilterCategory::Types => "Project type",
        }
    }

    /// Return the category for a query string key, if any.
    ///
    pub fn from_key(key: &str) -> Option<FilterCategory> {
        FilterCategory::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Return every valid value of the category in declaration order.
    ///
    pub fn values(self) -> Vec<FilterValue> {
        match self {
            FilterCategory::Themes => Theme::ALL.into_iter().map(FilterValue::Theme).collect(),
            FilterCategory::Status => Status::ALL.into_iter().map(FilterValue::Status).collect(),
            FilterCategory::Types => ProjectType::ALL
                .into_iter()
                .map(FilterValue::Type)
                .collect(),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Top-level activity a project belongs to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Build,
    Play,
    Research,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Build, Theme::Play, Theme::Research];

    pub fn key(self) -> &'static str {
        match self {
            Theme::Build => "build",
            Theme::Play => "play",
            Theme::Research => "research",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Build => "Build",
            Theme::Play => "Play",
            Theme::Research => "Research",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Build => "⚒",
            Theme::Play => "♟",
            Theme::Research => "⚗",
        }
    }
}

/// Lifecycle status of a project.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Archived,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::Inactive, Status::Archived];

    pub fn key(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Archived => "archived",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Archived => "Archived",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Status::Active => "●",
            Status::Inactive => "◐",
            Status::Archived => "○",
        }
    }
}

/// Kind of deliverable a project produces.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    Devtools,
    Infrastructure,
    Research,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Application,
        ProjectType::Devtools,
        ProjectType::Infrastructure,
        ProjectType::Research,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProjectType::Application => "application",
            ProjectType::Devtools => "devtools",
            ProjectType::Infrastructure => "infrastructure",
            ProjectType::Research => "research",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Application => "Application",
            ProjectType::Devtools => "Dev tools",
            ProjectType::Infrastructure => "Infrastructure",
            ProjectType::Research => "Research paper",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProjectType::Application => "▣",
            ProjectType::Devtools => "⚙",
            ProjectType::Infrastructure => "▤",
            ProjectType::Research => "✎",
        }
    }
}

/// A single selectable value, tagged with the category it belongs to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterValue {
    Theme(Theme),
    Status(Status),
    Type(ProjectType),
}

impl FilterValue {
    pub fn category(self) -> FilterCategory {
        match self {
            FilterValue::Theme(_) => FilterCategory::Themes,
            FilterValue::Status(_) => FilterCategory::Status,
            FilterValue::Type(_) => FilterCategory::Types,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FilterValue::Theme(v) => v.key(),
            FilterValue::Status(v) => v.key(),
            FilterValue::Type(v) => v.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterValue::Theme(v) => v.label(),
            FilterValue::Status(v) => v.label(),
            FilterValue::Type(v) => v.label(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FilterValue::Theme(v) => v.icon(),
            FilterValue::Status(v) => v.icon(),
            FilterValue::Type(v) => v.icon(),
        }
    }

    /// Resolve a value key within a category. Unknown keys yield `None`.
    ///
    pub fn parse(category: FilterCategory, key: &str) -> Option<FilterValue> {
        category.values().into_iter().find(|v| v.key() == key)
    }

    /// Return every value of every category, grouped by category.
    ///
    pub fn all() -> Vec<FilterValue> {
        FilterCategory::ALL
            .into_iter()
            .flat_map(FilterCategory::values)
            .collect()
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category().key(), self.key())
    }
}

impl Dummy<Faker> for Theme {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        Theme::ALL[rng.gen_range(0..Theme::ALL.len())]
    }
}

impl Dummy<Faker> for Status {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        Status::ALL[rng.gen_range(0..Status::ALL.len())]
    }
}

impl Dummy<Faker> for ProjectType {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        ProjectType::ALL[rng.gen_range(0..ProjectType::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_round_trip() {
        for category in FilterCategory::ALL {
            assert_eq!(FilterCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(FilterCategory::from_key("keywords"), None);
    }

    #[test]
    fn value_keys_resolve_within_their_category() {
        for value in FilterValue::all() {
            assert_eq!(FilterValue::parse(value.category(), value.key()), Some(value));
        }
    }

    #[test]
    fn research_key_is_scoped_by_category() {
        assert_eq!(
            FilterValue::parse(FilterCategory::Themes, "research"),
            Some(FilterValue::Theme(Theme::Research))
        );
        assert_eq!(
            FilterValue::parse(FilterCategory::Types, "research"),
            Some(FilterValue::Type(ProjectType::Research))
        );
        assert_eq!(FilterValue::parse(FilterCategory::Status, "research"), None);
    }

    #[test]
    fn values_follow_declaration_order() {
        let themes = FilterCategory::Themes.values();
        assert_eq!(
            themes,
            vec![
                FilterValue::Theme(Theme::Build),
                FilterValue::Theme(Theme::Play),
                FilterValue::Theme(Theme::Research),
            ]
        );
        assert_eq!(FilterValue::all().len(), 10);
    }

    #[test]
    fn theme_deserializes_from_lowercase_key() {
        let theme: Theme = serde_json::from_str("\"play\"").unwrap();
        assert_eq!(theme, Theme::Play);
        assert!(serde_json::from_str::<Theme>("\"party\"").is_err());
    }

    #[test]
    fn display_includes_category() {
        assert_eq!(FilterValue::Status(Status::Archived).to_string(), "status=archived");
    }
}
