//! Error types for the extraction layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides
//! [`ExtractError`] for backend failures and converts it to [`ScanError`]
//! so callers deal with a single error type.

use pdfaddr_core::ScanError;
use thiserror::Error;

/// Error type for first-page text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes could not be parsed as a PDF, or a page could not be decoded.
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document has no pages.
    #[error("document has no pages")]
    NoPages,

    /// The first page has no extractable text.
    #[error("no extractable text on first page")]
    NoText,

    /// The document is larger than the configured limit.
    #[error("document too large: {actual} bytes (limit: {limit})")]
    TooLarge {
        /// The configured limit in bytes.
        limit: u64,
        /// The actual size in bytes.
        actual: u64,
    },
}

impl From<ExtractError> for ScanError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Io(e) => ScanError::IoError(e.to_string()),
            ExtractError::TooLarge { limit, actual } => ScanError::TooLarge { limit, actual },
            other => ScanError::UnreadableDocument(other.to_string()),
        }
    }
}

impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        ExtractError::Parse(err.to_string())
    }
}
