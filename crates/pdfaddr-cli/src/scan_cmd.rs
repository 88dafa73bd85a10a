use std::path::{Path, PathBuf};

use pdfaddr::{AddressRecord, BatchSummary, Scanner, collect_documents};

use crate::cli::ExportFormat;
use crate::shared::{ProgressReporter, scan_options, summary_line, write_export_file};

pub fn run(
    dir: &Path,
    output: &Path,
    format: &ExportFormat,
    skip_lines: usize,
    max_bytes: Option<u64>,
    parallel: bool,
) -> Result<(), i32> {
    if !dir.is_dir() {
        eprintln!("Error: directory not found: {}", dir.display());
        return Err(1);
    }

    let documents = collect_documents(dir).map_err(|e| {
        eprintln!("Error: failed to list {}: {e}", dir.display());
        1
    })?;
    if documents.is_empty() {
        eprintln!("Warning: no PDF documents found under {}", dir.display());
    }
    tracing::info!(count = documents.len(), "collected documents");

    let scanner = Scanner::new(scan_options(skip_lines, max_bytes));
    let records = if parallel {
        scan_parallel(&scanner, &documents)
    } else {
        scan_sequential(&scanner, &documents)
    };

    write_export_file(output, format, &records)?;

    let shown = std::path::absolute(output).unwrap_or_else(|_| output.to_path_buf());
    println!("Spreadsheet created at {}", shown.display());
    eprintln!("{}", summary_line(&BatchSummary::from_records(&records)));
    Ok(())
}

fn scan_sequential(scanner: &Scanner, documents: &[PathBuf]) -> Vec<AddressRecord> {
    let progress = ProgressReporter::new(documents.len());
    let records = scanner.scan_batch_with_progress(documents, |i, _| progress.report(i));
    progress.finish();
    records
}

#[cfg(feature = "parallel")]
fn scan_parallel(scanner: &Scanner, documents: &[PathBuf]) -> Vec<AddressRecord> {
    scanner.scan_batch_parallel(documents)
}

#[cfg(not(feature = "parallel"))]
fn scan_parallel(scanner: &Scanner, documents: &[PathBuf]) -> Vec<AddressRecord> {
    tracing::warn!("built without the `parallel` feature; scanning sequentially");
    scan_sequential(scanner, documents)
}
