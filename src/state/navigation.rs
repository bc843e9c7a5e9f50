//! Navigation-related state types.
//!
//! This module contains enums for the views of the listing page and which
//! part of it receives key input.

/// Specifying which part of the page receives key input.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Results,
    Search,
    Filters,
}

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Projects,
    ProjectDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus() {
        assert_ne!(Focus::Results, Focus::Search);
        assert_ne!(Focus::Search, Focus::Filters);
    }

    #[test]
    fn test_view() {
        assert_eq!(View::Projects, View::Projects);
        assert_ne!(View::Projects, View::ProjectDetail);
    }
}
