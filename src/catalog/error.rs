//! Catalog-specific error types.

use std::path::PathBuf;

/// Errors that can occur while loading the project catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file extension is not yml, yaml or json
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Failed to parse catalog contents
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    /// Two projects share the same identifier
    #[error("Duplicate project id in catalog: {id}")]
    DuplicateId { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let error = CatalogError::UnsupportedFormat(PathBuf::from("/tmp/projects.toml"));
        assert!(error.to_string().contains("projects.toml"));

        let error = CatalogError::ParseFailed("bad indent".to_string());
        assert!(error.to_string().contains("bad indent"));

        let error = CatalogError::DuplicateId {
            id: "zkit".to_string(),
        };
        assert!(error.to_string().contains("Duplicate"));
        assert!(error.to_string().contains("zkit"));
    }
}
