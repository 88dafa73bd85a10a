//! Text-line address heuristic.
//!
//! Scans the lines of a page for the first "City, ST" line whose
//! predecessor starts with a 3–4 digit street number, then derives the
//! remaining fields from the neighbouring lines:
//!
//! ```text
//! i-2   John Smith MRN 4821        -> Name (markers stripped)
//! i-1   456 Oak Ave Apt 3          -> Address Line 1 / Address Line 2
//! i     Springfield, IL 62704      -> City, State, ZIP Code
//! ```
//!
//! Only the first qualifying line is used.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::AddressRecord;

/// "City, ST": group 1 is the city, group 2 the state code.
static CITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z\s]+),\s([A-Z]{2})").expect("valid city pattern"));

/// Street number followed by street text, up to the first comma.
static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3,4}\s[^,]+)").expect("valid address pattern"));

/// Apartment / unit marker and everything after it. Case-sensitive on purpose:
/// only the listed spellings count.
static UNIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(Apt|Unit|UNIT|APT|Spc)\b\s.*").expect("valid unit pattern")
});

/// Trailing record-keeping noise after a name.
static NAME_MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(GROUP|PURCHASER|Purchaser|Medical|MRN|MED|購|IDENTIF|Enrole|N.º).*")
        .expect("valid name marker pattern")
});

/// State code followed by a 5-digit ZIP with optional +4 extension.
static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]{2})\s(\d{5}(-\d{4})?)").expect("valid zip pattern"));

/// Noise keywords cut from the street address, in priority order.
pub const ADDRESS_NOISE_KEYWORDS: [&str; 7] = ["Health", "Med", "MED", "HEA", "MRN", " 醫", "醫"];

/// Options controlling how a page's lines are fed to the heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Number of lines dropped from the top of the page before parsing
    /// (default: 2).
    pub header_lines: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { header_lines: 2 }
    }
}

/// A qualifying City line together with the captures that qualified it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Index of the City line within the scanned lines.
    pub index: usize,
    /// The full City line.
    pub city_line: &'a str,
    /// City capture, untrimmed.
    pub city: &'a str,
    /// State capture.
    pub state: &'a str,
    /// Address pattern match on the preceding line, untrimmed.
    pub address: &'a str,
}

/// Find the first line matching the City pattern whose preceding line
/// matches the Address pattern.
///
/// A City match on the first line never qualifies since it has no
/// predecessor.
pub fn find_qualifying_line<S: AsRef<str>>(lines: &[S]) -> Option<LineMatch<'_>> {
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let Some(caps) = CITY_PATTERN.captures(line) else {
            continue;
        };
        if i == 0 {
            continue;
        }
        let Some(address) = ADDRESS_PATTERN.find(lines[i - 1].as_ref()) else {
            continue;
        };
        return Some(LineMatch {
            index: i,
            city_line: line,
            city: caps.get(1).map_or("", |m| m.as_str()),
            state: caps.get(2).map_or("", |m| m.as_str()),
            address: address.as_str(),
        });
    }
    None
}

/// Cut `address` before the first noise keyword, checking keywords in
/// [`ADDRESS_NOISE_KEYWORDS`] order and stopping at the first one present.
pub fn truncate_at_keyword(address: &str) -> &str {
    ADDRESS_NOISE_KEYWORDS
        .iter()
        .find_map(|keyword| address.find(keyword))
        .map_or(address, |pos| address[..pos].trim())
}

/// Byte offset of the first unit marker in `address`.
pub fn find_unit(address: &str) -> Option<usize> {
    UNIT_PATTERN.find(address).map(|m| m.start())
}

/// Split `address` into (line 1, line 2) at the first unit marker.
///
/// Without a marker, line 2 is empty.
pub fn split_unit(address: &str) -> (&str, &str) {
    split_unit_at(address, find_unit(address))
}

/// Split `address` at `unit_start`, clamped to the end of `address`.
///
/// The offset may come from a longer string that `address` is a prefix of;
/// an offset at or past the end leaves line 2 empty.
pub fn split_unit_at(address: &str, unit_start: Option<usize>) -> (&str, &str) {
    match unit_start {
        Some(start) => {
            let at = start.min(address.len());
            (address[..at].trim(), address[at..].trim())
        }
        None => (address, ""),
    }
}

/// Remove everything from the first name marker onward.
pub fn strip_name_markers(line: &str) -> &str {
    match NAME_MARKER_PATTERN.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    }
}

/// ZIP code (5 or 9 digits) following a state code on `line`.
pub fn extract_zip(line: &str) -> Option<&str> {
    ZIP_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
}

/// Derive an [`AddressRecord`] from a page's text lines.
///
/// Fields the heuristic cannot populate stay empty; if no line qualifies
/// the whole record is empty. The source identifier is never set here.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> AddressRecord {
    let mut record = AddressRecord::default();
    let Some(found) = find_qualifying_line(lines) else {
        return record;
    };

    record.city = found.city.trim().to_string();
    record.state = found.state.trim().to_string();

    // Unit offset is taken from the untruncated address and applied to the
    // truncated one.
    let full_address = found.address.trim();
    let unit_start = find_unit(full_address);
    let (line1, line2) = split_unit_at(truncate_at_keyword(full_address), unit_start);
    record.address_line1 = line1.to_string();
    record.address_line2 = line2.to_string();

    if found.index > 1 {
        let name_line = lines[found.index - 2].as_ref().trim();
        record.name = strip_name_markers(name_line).to_string();
    }

    if let Some(zip) = extract_zip(found.city_line) {
        record.zip_code = zip.to_string();
    }

    record
}

/// Drop the configured header lines, then [`parse`] the rest.
pub fn parse_page<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> AddressRecord {
    let body = lines.get(options.header_lines..).unwrap_or(&[]);
    parse(body)
}
