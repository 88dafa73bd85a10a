use std::path::PathBuf;

use pdfaddr::Scanner;

use crate::cli::OutputFormat;
use crate::shared::{print_records, scan_options};

pub fn run(
    files: &[PathBuf],
    format: &OutputFormat,
    skip_lines: usize,
    max_bytes: Option<u64>,
) -> Result<(), i32> {
    let scanner = Scanner::new(scan_options(skip_lines, max_bytes));
    let records = scanner.scan_batch(files);
    print_records(format, &records)
}
