//! Catalog Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the movie catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse catalog file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
