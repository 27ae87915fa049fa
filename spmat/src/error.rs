//! Error types for loading, computing and saving matrices

use std::path::PathBuf;

use spmat_core::SpmatError;
use thiserror::Error;

/// Errors raised by a [`crate::source::TextSource`]
#[derive(Debug, Error)]
pub enum SourceError {
    /// Identifier does not resolve to any matrix text
    #[error("Matrix source not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "http")]
    #[error("HTTP request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request for {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },
}

/// Errors surfaced by the spmat pipeline and command line tool
#[derive(Debug, Error)]
pub enum Error {
    /// Arithmetic or store failure
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// Matrix text from a named source was rejected
    #[error("{identifier}: {source}")]
    Parse {
        identifier: String,
        #[source]
        source: SpmatError,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for spmat operations
pub type Result<T> = std::result::Result<T, Error>;
