//! Batch address scanning.
//!
//! [`Scanner`] runs extract → parse for each document and never fails on a
//! single document: unreadable ones become [`AddressRecord::not_found`].
//! Results are returned in input order, one record per document.

use std::path::Path;

use pdfaddr_core::{AddressRecord, ParseOptions, ScanError, parse_page};
use pdfaddr_parse::{ExtractOptions, extract_first_page_lines, extract_first_page_lines_from_file};

/// Options for a scan run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// How page lines are fed to the heuristic.
    pub parse: ParseOptions,
    /// How documents are read.
    pub extract: ExtractOptions,
}

/// Extracts address records from documents.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner with the given options.
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// The options this scanner was created with.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Extract and parse a document, reporting read failures.
    ///
    /// The returned record has no source identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the document cannot be read or has no
    /// extractable text on its first page.
    pub fn try_read_document(&self, path: &Path) -> Result<AddressRecord, ScanError> {
        let lines = extract_first_page_lines_from_file(path, &self.options.extract)?;
        Ok(parse_page(&lines, &self.options.parse))
    }

    /// Extract and parse a document.
    ///
    /// A read failure yields the record with every field, the source
    /// identifier included, set to [`NOT_FOUND`](pdfaddr_core::NOT_FOUND).
    pub fn read_document(&self, path: &Path) -> AddressRecord {
        match self.try_read_document(path) {
            Ok(record) => {
                tracing::debug!(
                    path = %path.display(),
                    found = record.has_address(),
                    "parsed document"
                );
                record
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read PDF");
                AddressRecord::not_found()
            }
        }
    }

    /// Extract and parse an in-memory PDF.
    pub fn read_bytes(&self, bytes: &[u8]) -> AddressRecord {
        match extract_first_page_lines(bytes) {
            Ok(lines) => parse_page(&lines, &self.options.parse),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read PDF");
                AddressRecord::not_found()
            }
        }
    }

    /// [`read_document`](Self::read_document) with the source identifier set
    /// to the document path.
    pub fn scan_document(&self, path: &Path) -> AddressRecord {
        self.read_document(path)
            .with_source(path.display().to_string())
    }

    /// Scan documents one after another, in order.
    pub fn scan_batch<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<AddressRecord> {
        self.scan_batch_with_progress(paths, |_, _| {})
    }

    /// Like [`scan_batch`](Self::scan_batch), calling `progress` with the
    /// 1-based position and path before each document is processed.
    pub fn scan_batch_with_progress<P, F>(&self, paths: &[P], mut progress: F) -> Vec<AddressRecord>
    where
        P: AsRef<Path>,
        F: FnMut(usize, &Path),
    {
        let mut records = Vec::with_capacity(paths.len());
        for (i, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            progress(i + 1, path);
            records.push(self.scan_document(path));
        }
        records
    }

    /// Scan documents in parallel using rayon.
    ///
    /// Documents are independent, so each one is its own task; the result
    /// keeps input order.
    #[cfg(feature = "parallel")]
    pub fn scan_batch_parallel<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<AddressRecord> {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|path| self.scan_document(path.as_ref()))
            .collect()
    }
}

/// Outcome counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents with a qualifying address.
    pub found: usize,
    /// Readable documents without a qualifying address.
    pub no_address: usize,
    /// Documents that could not be read.
    pub unreadable: usize,
}

impl BatchSummary {
    /// Count outcomes over `records`.
    pub fn from_records(records: &[AddressRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            if record.is_not_found() {
                summary.unreadable += 1;
            } else if record.has_address() {
                summary.found += 1;
            } else {
                summary.no_address += 1;
            }
        }
        summary
    }

    /// Total number of documents.
    pub fn total(&self) -> usize {
        self.found + self.no_address + self.unreadable
    }
}
