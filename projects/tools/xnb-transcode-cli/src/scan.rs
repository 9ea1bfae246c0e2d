//! Recursive discovery of input files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// A file found by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    exists: bool,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        Self { path, exists: true }
    }

    /// Absolute path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file existed when the tree was scanned.
    pub fn exists(&self) -> bool {
        self.exists
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Input directory does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("Cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The result of walking an input tree.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Canonical form of the scanned root.
    pub root: PathBuf,
    /// Matching files, in directory traversal order.
    pub entries: Vec<FileEntry>,
    /// Subtrees and entries that could not be read and were skipped.
    pub skipped: Vec<ScanError>,
}

/// Recursively collects every file under `root` whose extension equals
/// `extension`, ignoring ASCII case.
///
/// Only a missing or unreadable `root` is fatal. Unreadable subdirectories are
/// logged, recorded in [`ScanReport::skipped`] and otherwise ignored.
/// Symlinked directories are not followed.
pub fn scan(root: &Path, extension: &str) -> Result<ScanReport, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootMissing(root.to_path_buf()));
    }

    let root = fs::canonicalize(root).map_err(|source| ScanError::Unreadable {
        path: root.to_path_buf(),
        source,
    })?;

    // The root itself must be listable; anything below it may fail.
    let dir_entries = fs::read_dir(&root).map_err(|source| ScanError::Unreadable {
        path: root.clone(),
        source,
    })?;

    let mut report = ScanReport {
        root,
        ..Default::default()
    };
    let root = report.root.clone();
    collect_entries(&root, dir_entries, extension, &mut report);

    debug!(
        root = %report.root.display(),
        found = report.entries.len(),
        skipped = report.skipped.len(),
        "Scan finished"
    );
    Ok(report)
}

/// Whether `path` has the extension `extension`, ignoring ASCII case.
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn find_matching_files(dir: &Path, extension: &str, report: &mut ScanReport) {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            skip(report, dir, source);
            return;
        }
    };
    collect_entries(dir, dir_entries, extension, report);
}

/// Walks the listing of `dir`; failed entries are recorded against `dir`.
fn collect_entries(
    dir: &Path,
    dir_entries: impl Iterator<Item = io::Result<fs::DirEntry>>,
    extension: &str,
    report: &mut ScanReport,
) {
    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                skip(report, dir, source);
                continue;
            }
        };

        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(source) => {
                skip(report, &path, source);
                continue;
            }
        };

        if file_type.is_dir() {
            find_matching_files(&path, extension, report);
        } else if matches_extension(&path, extension) && path.is_file() {
            report.entries.push(FileEntry::new(path));
        }
    }
}

fn skip(report: &mut ScanReport, path: &Path, source: io::Error) {
    warn!(path = %path.display(), "Skipping unreadable path: {source}");
    report.skipped.push(ScanError::Unreadable {
        path: path.to_path_buf(),
        source,
    });
}
