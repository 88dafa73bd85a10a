//! pdfaddr-core: Backend-independent address types and heuristics.
//!
//! This crate provides [`AddressRecord`] and the text-line heuristic that
//! turns the lines of a document's first page into address fields. It knows
//! nothing about PDF parsing; see `pdfaddr-parse` for line extraction.

pub mod address;
pub mod error;
pub mod record;

pub use address::{
    ADDRESS_NOISE_KEYWORDS, LineMatch, ParseOptions, extract_zip, find_qualifying_line, find_unit,
    parse, parse_page, split_unit, split_unit_at, strip_name_markers, truncate_at_keyword,
};
pub use error::ScanError;
pub use record::{AddressRecord, Field, NOT_FOUND};
