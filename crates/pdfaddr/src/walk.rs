//! Document discovery.
//!
//! Each immediate subfolder of the root holds one case; the first PDF in it
//! is the document to scan. Subfolders are ordered by batch prefix and by
//! the `MM.DD.N` stamp in their name.

use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Known batch prefixes, in processing order.
pub const FOLDER_PREFIXES: [&str; 5] = ["CD", "GLP", "MP3", "NLP", "PDF"];

static FOLDER_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("valid folder date pattern"));

/// Sort key for a case subfolder.
///
/// Ordered by prefix rank (unknown prefixes last), then by the `MM.DD.N`
/// stamp (undated folders after dated ones), then by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSortKey {
    rank: usize,
    stamp: Option<(u64, u64, u64)>,
    name: String,
}

impl FolderSortKey {
    /// Build the key for a folder name.
    ///
    /// A prefix only counts when the name has at least two
    /// whitespace-separated parts, e.g. `"GLP 3.14.2"`.
    pub fn new(name: &str) -> Self {
        let parts: Vec<&str> = name.split_whitespace().collect();
        let rank = match parts.as_slice() {
            [first, _, ..] => FOLDER_PREFIXES
                .iter()
                .position(|p| p == first)
                .map_or(usize::MAX, |i| i + 1),
            _ => usize::MAX,
        };
        let stamp = if rank == usize::MAX {
            None
        } else {
            folder_stamp(name)
        };
        Self {
            rank,
            stamp,
            name: name.to_string(),
        }
    }

    /// 1-based prefix rank, or `None` for folders without a known prefix.
    pub fn rank(&self) -> Option<usize> {
        (self.rank != usize::MAX).then_some(self.rank)
    }

    /// The `(month, day, number)` stamp, if the folder is dated.
    pub fn stamp(&self) -> Option<(u64, u64, u64)> {
        self.stamp
    }
}

impl Ord for FolderSortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| match (&self.stamp, &other.stamp) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for FolderSortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn folder_stamp(name: &str) -> Option<(u64, u64, u64)> {
    let caps = FOLDER_DATE_PATTERN.captures(name)?;
    let num = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();
    Some((num(1)?, num(2)?, num(3)?))
}

/// Sort folder names into processing order.
pub fn sort_folders(names: &mut [String]) {
    names.sort_by_cached_key(|name| FolderSortKey::new(name));
}

/// First `.pdf` file in `dir`, by file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn first_pdf_in(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut pdfs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_pdf = entry.file_name().to_string_lossy().ends_with(".pdf");
        if is_pdf && path.is_file() {
            pdfs.push(path);
        }
    }
    pdfs.sort();
    Ok(pdfs.into_iter().next())
}

/// Collect one PDF per immediate subfolder of `root`, in folder order.
///
/// Subfolders without a PDF contribute nothing. Subfolders that cannot be
/// listed are skipped with a warning.
///
/// # Errors
///
/// Returns an error if `root` itself cannot be listed.
pub fn collect_documents(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut folders = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.path().is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    sort_folders(&mut folders);

    let mut documents = Vec::new();
    for folder in &folders {
        let dir = root.join(folder);
        match first_pdf_in(&dir) {
            Ok(Some(pdf)) => documents.push(pdf),
            Ok(None) => tracing::debug!(folder = %dir.display(), "no PDF in folder"),
            Err(err) => {
                tracing::warn!(folder = %dir.display(), error = %err, "skipping unreadable folder");
            }
        }
    }
    Ok(documents)
}
