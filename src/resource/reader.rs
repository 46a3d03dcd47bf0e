//! Readers that turn input streams and package directories into resource records

use std::io::Read;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};
use wax::{Glob, Pattern};

use super::{ResourceRecord, parse_json, parse_yaml};
use crate::error::{CountError, Result};
use crate::package::PackageBoundary;

/// Label used in errors for resources read from a stream
pub const STREAM_LABEL: &str = "<stdin>";

/// File name patterns read as resources when none are configured
pub const DEFAULT_FILE_PATTERNS: &[&str] = &["*.yaml", "*.yml", "*.json"];

/// Matches file names against resource file glob patterns
#[derive(Debug)]
pub struct FileMatcher {
    globs: Vec<Glob<'static>>,
}

impl FileMatcher {
    /// Compile the given glob patterns
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let globs = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Glob::new(pattern)
                    .map(Glob::into_owned)
                    .map_err(|e| CountError::InvalidFilePattern {
                        pattern: pattern.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { globs })
    }

    /// Whether a file name is a resource file
    pub fn matches(&self, file_name: &str) -> bool {
        self.globs.iter().any(|glob| glob.is_match(file_name))
    }

    fn is_json(file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl Default for FileMatcher {
    // The default patterns are literals known to compile
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PATTERNS).expect("default resource patterns are valid")
    }
}

/// Read every document from a stream of `---` separated documents
pub fn read_stream<R: Read>(mut reader: R) -> Result<Vec<ResourceRecord>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| CountError::FileReadFailed {
            path: STREAM_LABEL.to_string(),
            reason: e.to_string(),
        })?;

    let records = parse_yaml(&content)?;
    tracing::debug!(resources = records.len(), "read resources from stream");
    Ok(records)
}

/// Read the resources that belong to the package rooted at `path`
///
/// Subdirectories carrying the boundary file are separate packages and are not read.
/// Hidden directories are skipped.
pub fn read_package(
    path: &Path,
    boundary: &PackageBoundary,
    matcher: &FileMatcher,
) -> Result<Vec<ResourceRecord>> {
    let metadata = std::fs::metadata(path).map_err(|e| CountError::PackageAccessFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(CountError::NotADirectory {
            path: path.display().to_string(),
        });
    }

    let walker = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| belongs_to_package(entry, boundary));

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| CountError::PackageAccessFailed {
            path: e
                .path()
                .unwrap_or(path)
                .display()
                .to_string(),
            reason: e.to_string(),
        })?;

        if !is_regular_file(&entry) {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if !matcher.matches(&file_name) {
            continue;
        }

        records.extend(read_file(entry.path(), FileMatcher::is_json(&file_name))?);
    }

    Ok(records)
}

/// Whether a walked entry is part of the package being read
fn belongs_to_package(entry: &DirEntry, boundary: &PackageBoundary) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    !is_hidden(entry) && !boundary.is_package(entry.path())
}

/// Whether an entry is a file, or a symlink that resolves to one
///
/// Directory symlinks are never descended into.
fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink()
        && std::fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_file())
}

pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn read_file(path: &Path, json: bool) -> Result<Vec<ResourceRecord>> {
    let label = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| CountError::FileReadFailed {
        path: label.clone(),
        reason: e.to_string(),
    })?;

    let records = if json {
        parse_json(&content)
    } else {
        parse_yaml(&content)
    }
    .map_err(|e| e.in_file(&label))?;

    tracing::debug!(file = %label, resources = records.len(), "read resource file");
    Ok(records)
}
