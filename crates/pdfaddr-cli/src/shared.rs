use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

use pdfaddr::{AddressRecord, BatchSummary, ExtractOptions, ParseOptions, ScanOptions};

use crate::cli::{ExportFormat, OutputFormat};

/// Build scan options from the shared command-line flags.
pub fn scan_options(skip_lines: usize, max_bytes: Option<u64>) -> ScanOptions {
    ScanOptions {
        parse: ParseOptions {
            header_lines: skip_lines,
        },
        extract: ExtractOptions {
            max_input_bytes: max_bytes,
        },
    }
}

/// Write records in a spreadsheet format to `out`.
pub fn write_export(
    out: &mut impl Write,
    format: &ExportFormat,
    records: &[AddressRecord],
) -> io::Result<()> {
    match format {
        ExportFormat::Csv => pdfaddr::write_csv(out, records),
        ExportFormat::Json => pdfaddr::write_json(out, records),
    }
}

/// Write records to `path`, creating or truncating it.
///
/// Returns `Err(1)` with a message printed to stderr if the file cannot be
/// written.
pub fn write_export_file(
    path: &Path,
    format: &ExportFormat,
    records: &[AddressRecord],
) -> Result<(), i32> {
    let result = File::create(path).and_then(|file| {
        let mut out = BufWriter::new(file);
        write_export(&mut out, format, records)?;
        out.flush()
    });
    result.map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", path.display());
        1
    })
}

/// Print records to stdout in the requested format.
pub fn print_records(format: &OutputFormat, records: &[AddressRecord]) -> Result<(), i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match format {
        OutputFormat::Text => pdfaddr::write_text(&mut out, records),
        OutputFormat::Csv => pdfaddr::write_csv(&mut out, records),
        OutputFormat::Json => pdfaddr::write_json(&mut out, records),
    };
    result.map_err(|e| {
        eprintln!("Error: failed to write output: {e}");
        1
    })
}

/// One-line outcome summary for a batch.
pub fn summary_line(summary: &BatchSummary) -> String {
    format!(
        "{} document(s): {} with address, {} without address, {} unreadable",
        summary.total(),
        summary.found,
        summary.no_address,
        summary.unreadable
    )
}

/// `Processing document N/M...` on stderr, redrawn in place.
///
/// Silent unless stderr is a terminal.
pub struct ProgressReporter {
    total: usize,
    enabled: bool,
}

impl ProgressReporter {
    /// Reporter for `total` documents, enabled when stderr is a TTY.
    pub fn new(total: usize) -> Self {
        Self::with_enabled(total, io::stderr().is_terminal())
    }

    fn with_enabled(total: usize, enabled: bool) -> Self {
        Self { total, enabled }
    }

    fn message(&self, current: usize) -> String {
        format!("Processing document {current}/{}...", self.total)
    }

    /// Show document `current` (1-based).
    pub fn report(&self, current: usize) {
        if self.enabled {
            eprint!("\r{}", self.message(current));
            let _ = io::stderr().flush();
        }
    }

    /// Blank out the progress line.
    pub fn finish(&self) {
        if self.enabled {
            let width = self.message(self.total).len();
            eprint!("\r{}\r", " ".repeat(width));
            let _ = io::stderr().flush();
        }
    }
}
