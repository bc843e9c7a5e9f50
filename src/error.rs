//! Application-wide error types.
//!
//! This module defines the top-level error type that the configuration,
//! catalog and terminal layers convert into.

pub use crate::catalog::CatalogError;
pub use crate::config::ConfigError;

/// Main application error type.
///
/// Wraps the module-level errors with `thiserror` conversions so `?` works
/// across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
