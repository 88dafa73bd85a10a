//! Error types for pdfaddr.
//!
//! [`ScanError`] covers the failures that can happen while turning one
//! document into an [`AddressRecord`](crate::AddressRecord). None of them
//! abort a batch: the batch layer converts them into the
//! [`NOT_FOUND`](crate::NOT_FOUND) record and moves on.

use std::fmt;

/// Failure to obtain text lines from a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// The document could not be opened or has no extractable text.
    UnreadableDocument(String),
    /// I/O error reading the document.
    IoError(String),
    /// The document exceeds the configured size limit.
    TooLarge {
        /// The configured limit in bytes.
        limit: u64,
        /// The actual document size in bytes.
        actual: u64,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnreadableDocument(msg) => write!(f, "unreadable document: {msg}"),
            ScanError::IoError(msg) => write!(f, "I/O error: {msg}"),
            ScanError::TooLarge { limit, actual } => {
                write!(f, "document too large: {actual} bytes (limit: {limit})")
            }
        }
    }
}

impl std::error::Error for ScanError {}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::IoError(err.to_string())
    }
}
