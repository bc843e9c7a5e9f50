//! Page location and navigation history.
//!
//! A `Location` is the path and query string of the listing page. `History`
//! is the in-process stack of visited locations that stands in for a
//! browser's session history.

use log::*;
use std::fmt;

pub const PROJECTS_PATH: &str = "/projects";

/// Path plus query string, without fragment.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: String,
}

impl Location {
    pub fn new(path: &str, query: &str) -> Location {
        let path = if path.is_empty() { "/" } else { path };
        Location {
            path: path.to_string(),
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
        }
    }

    /// The listing page with the given query string.
    ///
    pub fn projects(query: &str) -> Location {
        Location::new(PROJECTS_PATH, query)
    }

    /// Parse a path or absolute URL. Scheme and host are dropped, as is any
    /// fragment.
    ///
    pub fn parse(url: &str) -> Location {
        let url = url.trim();
        let without_fragment = url.split('#').next().unwrap_or_default();
        let relative = match without_fragment.find("://") {
            Some(scheme_end) => {
                let rest = &without_fragment[scheme_end + 3..];
                match rest.find(|c: char| c == '/' || c == '?') {
                    Some(path_start) => &rest[path_start..],
                    None => "",
                }
            }
            None => without_fragment,
        };
        match relative.split_once('?') {
            Some((path, query)) => Location::new(path, query),
            None => Location::new(relative, ""),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::projects("")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

/// Stack of visited locations with a cursor at the current entry.
///
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> History {
        History {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Navigate to a new location. Forward entries are discarded. Pushing the
    /// current location again does nothing. Returns true if an entry was
    /// added.
    ///
    pub fn push(&mut self, location: Location) -> bool {
        if *self.current() == location {
            return false;
        }
        debug!("Navigating to {}", location);
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
        true
    }

    /// Overwrite the current entry.
    ///
    pub fn replace(&mut self, location: Location) {
        debug!("Replacing {} with {}", self.current(), location);
        self.entries[self.index] = location;
    }

    /// Step back one entry, returning the new current location.
    ///
    pub fn back(&mut self) -> Option<&Location> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        History::new(Location::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bare_path_without_query() {
        assert_eq!(Location::projects("").to_string(), "/projects");
        assert_eq!(
            Location::projects("themes=build").to_string(),
            "/projects?themes=build"
        );
    }

    #[test]
    fn parses_absolute_url() {
        let location = Location::parse("https://example.org/projects?status=active#top");
        assert_eq!(location.path(), "/projects");
        assert_eq!(location.query(), "status=active");
    }

    #[test]
    fn parses_host_only_url_and_relative_query() {
        assert_eq!(Location::parse("https://example.org").to_string(), "/");
        assert_eq!(Location::parse("https://example.org?themes=play").query(), "themes=play");
        assert_eq!(Location::parse("/projects").query(), "");
    }

    #[test]
    fn push_skips_duplicate_of_current_entry() {
        let mut history = History::default();
        assert!(!history.push(Location::projects("")));
        assert!(history.push(Location::projects("themes=play")));
        assert!(!history.push(Location::projects("themes=play")));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn back_then_push_discards_forward_entries() {
        let mut history = History::default();
        history.push(Location::projects("themes=play"));
        history.push(Location::projects("themes=build"));
        assert_eq!(
            history.back().map(|l| l.to_string()),
            Some("/projects?themes=play".to_string())
        );
        history.push(Location::projects("status=active"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().query(), "status=active");
    }

    #[test]
    fn back_stops_at_first_entry() {
        let mut history = History::default();
        assert!(!history.can_go_back());
        assert!(history.back().is_none());
    }

    #[test]
    fn replace_overwrites_current_entry() {
        let mut history = History::default();
        history.replace(Location::projects("types=devtools"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().to_string(), "/projects?types=devtools");
    }
}
