//! Error types for dataset building.

use redline::ExtractError;
use thiserror::Error;

/// Errors that can occur while building a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A document could not be extracted. Recoverable per document.
    #[error("failed to extract {path}: {source}")]
    Extract {
        path: String,
        #[source]
        source: ExtractError,
    },

    /// Filesystem access failed.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be written out.
    #[error("failed to export {path}: {message}")]
    Export { path: String, message: String },

    /// The configuration could not be read or is invalid.
    #[error("invalid configuration {path}: {message}")]
    Config { path: String, message: String },
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;
