//! First-page line extraction.
//!
//! Reads a document, takes the text of its first page and splits it into
//! lines. A document that cannot be opened, has no pages, or whose first
//! page carries no text is reported as an error; turning that into a
//! placeholder record is the caller's job.

use std::path::Path;

use pdfaddr_core::ScanError;

use crate::backend::TextBackend;
use crate::error::ExtractError;
use crate::lopdf_backend::LopdfBackend;

/// Options controlling document reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Refuse documents larger than this many bytes (default: no limit).
    pub max_input_bytes: Option<u64>,
}

/// Split page text into lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Extract the lines of the first page using backend `B`.
///
/// # Errors
///
/// Returns [`ScanError`] if the document cannot be parsed, has no pages, or
/// has no extractable text on its first page.
pub fn first_page_lines_with<B: TextBackend>(bytes: &[u8]) -> Result<Vec<String>, ScanError> {
    let doc = B::open(bytes).map_err(Into::<ScanError>::into)?;
    if B::page_count(&doc) == 0 {
        return Err(ExtractError::NoPages.into());
    }
    let text = B::page_text(&doc, 0).map_err(Into::<ScanError>::into)?;
    if text.trim().is_empty() {
        return Err(ExtractError::NoText.into());
    }

    let lines = split_lines(&text);
    #[cfg(feature = "tracing")]
    tracing::debug!(lines = lines.len(), "extracted first page text");
    Ok(lines)
}

/// Extract the lines of the first page of an in-memory PDF with the lopdf
/// backend.
///
/// # Errors
///
/// See [`first_page_lines_with`].
pub fn extract_first_page_lines(bytes: &[u8]) -> Result<Vec<String>, ScanError> {
    first_page_lines_with::<LopdfBackend>(bytes)
}

/// Read a PDF file and extract the lines of its first page.
///
/// # Errors
///
/// Returns [`ScanError::IoError`] if the file cannot be read,
/// [`ScanError::TooLarge`] if it exceeds `options.max_input_bytes`, and
/// otherwise the errors of [`first_page_lines_with`].
pub fn extract_first_page_lines_from_file(
    path: &Path,
    options: &ExtractOptions,
) -> Result<Vec<String>, ScanError> {
    if let Some(limit) = options.max_input_bytes {
        let actual = std::fs::metadata(path).map_err(ExtractError::from)?.len();
        if actual > limit {
            return Err(ExtractError::TooLarge { limit, actual }.into());
        }
    }
    let bytes = std::fs::read(path).map_err(ExtractError::from)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
    extract_first_page_lines(&bytes)
}
