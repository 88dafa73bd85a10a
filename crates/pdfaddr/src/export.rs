//! Tabular export of address records.
//!
//! Every export has the same columns, in [`Field::ALL`] order, under their
//! display headers. Empty fields stay empty; unreadable documents already
//! carry [`NOT_FOUND`](pdfaddr_core::NOT_FOUND) in every field.

use std::io::{self, Write};

use pdfaddr_core::{AddressRecord, Field};

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') || text.contains('\r') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn csv_row<'a>(out: &mut impl Write, cells: impl IntoIterator<Item = &'a str>) -> io::Result<()> {
    let row: Vec<String> = cells.into_iter().map(csv_escape).collect();
    writeln!(out, "{}", row.join(","))
}

/// Write a header row and one row per record as CSV.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_csv(out: &mut impl Write, records: &[AddressRecord]) -> io::Result<()> {
    csv_row(out, Field::ALL.iter().map(Field::header))?;
    for record in records {
        csv_row(out, record.values())?;
    }
    Ok(())
}

/// Render records as a CSV string.
pub fn to_csv(records: &[AddressRecord]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_csv(&mut buf, records);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write a tab-separated table, header first.
///
/// Tabs and newlines inside values are replaced with spaces.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_text(out: &mut impl Write, records: &[AddressRecord]) -> io::Result<()> {
    let headers: Vec<&str> = Field::ALL.iter().map(Field::header).collect();
    writeln!(out, "{}", headers.join("\t"))?;
    for record in records {
        let cells: Vec<String> = record
            .values()
            .iter()
            .map(|v| v.replace(['\t', '\n', '\r'], " "))
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

/// Records as a JSON array of objects keyed by column header.
#[cfg(feature = "serde")]
pub fn to_json_value(records: &[AddressRecord]) -> serde_json::Value {
    let rows = records
        .iter()
        .map(|record| {
            let row: serde_json::Map<String, serde_json::Value> = Field::ALL
                .iter()
                .map(|field| (field.header().to_string(), record.get(*field).into()))
                .collect();
            serde_json::Value::Object(row)
        })
        .collect();
    serde_json::Value::Array(rows)
}

/// Write records as pretty-printed JSON.
///
/// # Errors
///
/// Returns any error from the underlying writer.
#[cfg(feature = "serde")]
pub fn write_json(out: &mut impl Write, records: &[AddressRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &to_json_value(records))?;
    writeln!(out)
}
