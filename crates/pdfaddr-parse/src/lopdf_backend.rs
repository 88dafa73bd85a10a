//! lopdf-based text extraction backend.
//!
//! Implements [`TextBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate. This is the default backend for pdfaddr.

use crate::backend::TextBackend;
use crate::error::ExtractError;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    inner: lopdf::Document,
    /// 1-based page numbers in page-tree order, as lopdf expects them.
    page_numbers: Vec<u32>,
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_numbers.len())
            .finish_non_exhaustive()
    }
}

/// The lopdf-based text backend.
///
/// # Example
///
/// ```ignore
/// use pdfaddr_parse::{LopdfBackend, TextBackend};
///
/// let doc = LopdfBackend::open(pdf_bytes)?;
/// let text = LopdfBackend::page_text(&doc, 0)?;
/// ```
pub struct LopdfBackend;

impl TextBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = ExtractError;

    fn open(bytes: &[u8]) -> Result<LopdfDocument, ExtractError> {
        let inner = lopdf::Document::load_mem(bytes)?;
        let page_numbers = inner.get_pages().keys().copied().collect();
        Ok(LopdfDocument {
            inner,
            page_numbers,
        })
    }

    fn page_count(doc: &LopdfDocument) -> usize {
        doc.page_numbers.len()
    }

    fn page_text(doc: &LopdfDocument, index: usize) -> Result<String, ExtractError> {
        let page_number = doc.page_numbers.get(index).copied().ok_or_else(|| {
            ExtractError::Parse(format!(
                "page index {index} out of range (0..{})",
                doc.page_numbers.len()
            ))
        })?;
        Ok(doc.inner.extract_text(&[page_number])?)
    }
}
