//! Project catalog module.
//!
//! The catalog is the read-only, ordered list of projects the listing page
//! browses. It is loaded once at start-up from a YAML or JSON file, or from
//! the catalog compiled into the binary.

mod error;
mod resource;

pub use error::CatalogError;
pub use resource::*;

use log::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../assets/projects.yml");

/// Define specification for catalog files.
///
#[derive(Deserialize)]
struct FileSpec {
    projects: Vec<Project>,
}

/// Ordered, immutable collection of projects.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Return a catalog over the given projects, rejecting duplicate ids.
    ///
    pub fn new(projects: Vec<Project>) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: project.id.clone(),
                });
            }
        }
        Ok(Catalog { projects })
    }

    /// Return the catalog compiled into the binary.
    ///
    pub fn builtin() -> Result<Catalog, CatalogError> {
        Catalog::from_yaml(BUILTIN_CATALOG)
    }

    /// Load a catalog file, choosing the format from its extension.
    ///
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        debug!("Loading catalog from {}...", path.display());
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => Catalog::from_yaml(&contents)?,
            Some("json") => Catalog::from_json(&contents)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };
        info!(
            "Loaded {} projects from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_yaml(contents: &str) -> Result<Catalog, CatalogError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| CatalogError::ParseFailed(e.to_string()))?;
        Catalog::new(data.projects)
    }

    pub fn from_json(contents: &str) -> Result<Catalog, CatalogError> {
        let data: FileSpec = serde_json::from_str(contents)
            .map_err(|e| CatalogError::ParseFailed(e.to_string()))?;
        Catalog::new(data.projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
