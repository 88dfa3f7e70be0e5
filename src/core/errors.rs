//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tcomap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors (rejected at the boundary, never propagated
    /// into the aggregator)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Vendor catalog errors
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        path: Option<PathBuf>,
    },

    /// Analysis errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a catalog error without path context
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
            path: None,
        }
    }

    /// Create a catalog error with path context
    pub fn catalog_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Catalog {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
