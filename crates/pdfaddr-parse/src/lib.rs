//! pdfaddr-parse: first-page text extraction for pdfaddr.
//!
//! Implements the extraction layer: a pluggable [`TextBackend`] (lopdf by
//! default) and helpers that return the text lines of a document's first
//! page. It depends on pdfaddr-core for the shared error type.

pub mod backend;
pub mod error;
pub mod extract;
pub mod lopdf_backend;

pub use backend::TextBackend;
pub use error::ExtractError;
pub use extract::{
    ExtractOptions, extract_first_page_lines, extract_first_page_lines_from_file,
    first_page_lines_with, split_lines,
};
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use pdfaddr_core;
