//! pdfaddr: Extract postal addresses from the first page of PDF documents.
//!
//! This is the public API facade crate. It re-exports the record types and
//! heuristic from pdfaddr-core, uses pdfaddr-parse for text extraction, and
//! adds the batch pipeline around them.
//!
//! # Architecture
//!
//! - **pdfaddr-core**: Address records and the text-line heuristic
//! - **pdfaddr-parse**: First-page text extraction (lopdf backend)
//! - **pdfaddr** (this crate): Document discovery, batch scanning, export
//!
//! # Example
//!
//! ```ignore
//! use pdfaddr::{Scanner, collect_documents, write_csv};
//!
//! let documents = collect_documents("intake".as_ref())?;
//! let records = Scanner::default().scan_batch(&documents);
//! write_csv(&mut std::io::stdout(), &records)?;
//! ```

pub mod export;
pub mod scanner;
pub mod walk;

use std::io;
use std::path::Path;

pub use export::{csv_escape, to_csv, write_csv, write_text};
#[cfg(feature = "serde")]
pub use export::{to_json_value, write_json};
pub use pdfaddr_core::{
    AddressRecord, Field, LineMatch, NOT_FOUND, ParseOptions, ScanError, find_qualifying_line,
    parse, parse_page,
};
pub use pdfaddr_parse::{
    ExtractOptions, extract_first_page_lines, extract_first_page_lines_from_file,
};
pub use scanner::{BatchSummary, ScanOptions, Scanner};
pub use walk::{FolderSortKey, collect_documents, first_pdf_in, sort_folders};

pub use pdfaddr_core;
pub use pdfaddr_parse;

/// Collect the documents under `root` and scan them in order.
///
/// # Errors
///
/// Returns an error only if `root` cannot be listed; individual documents
/// never fail the batch.
pub fn scan_directory(root: &Path, scanner: &Scanner) -> io::Result<Vec<AddressRecord>> {
    let documents = collect_documents(root)?;
    tracing::info!(count = documents.len(), root = %root.display(), "scanning documents");
    Ok(scanner.scan_batch(&documents))
}
