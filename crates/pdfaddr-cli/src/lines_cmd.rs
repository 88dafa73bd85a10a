use std::path::Path;

use pdfaddr::{ExtractOptions, extract_first_page_lines_from_file, find_qualifying_line};

pub fn run(file: &Path, skip_lines: usize) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let lines = extract_first_page_lines_from_file(file, &ExtractOptions::default()).map_err(|e| {
        eprintln!("Error: failed to read PDF: {e}");
        1
    })?;

    let body = lines.get(skip_lines..).unwrap_or(&[]);
    for (i, line) in body.iter().enumerate() {
        println!("{i:>3}  {line}");
    }

    match find_qualifying_line(body) {
        Some(found) => println!("--- qualifying City line: {} ---", found.index),
        None => println!("--- no qualifying line ---"),
    }
    Ok(())
}
