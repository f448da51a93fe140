//! Error types for tracked-change extraction.
//!
//! Both variants are fatal for the document being processed. Callers running
//! over many documents are expected to catch them per document and move on.

use thiserror::Error;

/// Errors that can occur while loading a document for extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input is not a readable container, or the markup entry is missing.
    #[error("invalid document container: {message}")]
    Container { message: String },

    /// The markup entry could not be decoded or is not well-formed.
    #[error("failed to parse document markup: {message}")]
    MarkupParse { message: String },
}

impl ExtractError {
    pub(crate) fn container(message: impl Into<String>) -> Self {
        ExtractError::Container {
            message: message.into(),
        }
    }

    pub(crate) fn markup(message: impl Into<String>) -> Self {
        ExtractError::MarkupParse {
            message: message.into(),
        }
    }
}

impl From<roxmltree::Error> for ExtractError {
    fn from(err: roxmltree::Error) -> Self {
        ExtractError::markup(err.to_string())
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
