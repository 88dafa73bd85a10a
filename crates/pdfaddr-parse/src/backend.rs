//! Text extraction backend trait.
//!
//! Defines the [`TextBackend`] trait that abstracts reading page text out of
//! a PDF, so the address heuristic does not depend on a particular PDF
//! library.

use pdfaddr_core::ScanError;

/// Trait abstracting page text extraction.
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// if MyBackend::page_count(&doc) > 0 {
///     let text = MyBackend::page_text(&doc, 0)?;
/// }
/// ```
pub trait TextBackend {
    /// The parsed PDF document type.
    type Document;

    /// Backend-specific error type, convertible to [`ScanError`].
    type Error: std::error::Error + Into<ScanError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a valid PDF document.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Extract the text of a page by 0-based index, one text line per `\n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page content
    /// cannot be decoded.
    fn page_text(doc: &Self::Document, index: usize) -> Result<String, Self::Error>;
}
