//! Package traversal
//!
//! Enumerates the package scopes below a root directory and drives per-scope processing.
//! The root is always processed first. Nested packages follow in lexicographic path order
//! so repeated runs over the same tree produce the same output.
//!
//! How a failing scope is handled depends on [`ScopeMode`]:
//! - [`ScopeMode::SingleScope`]: the failure ends the run
//! - [`ScopeMode::MultiScope`]: the failure is written as a line naming the package and the
//!   remaining scopes are still processed

use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CountError, Result};
use crate::package::PackageBoundary;
use crate::resource::reader::is_hidden;

/// Failure policy for a traversal run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    /// Only the root is processed; its failure is the run's failure
    SingleScope,
    /// The root and every nested package are processed; failures are reported inline
    MultiScope,
}

impl ScopeMode {
    /// Select the mode from the `--recurse-subpackages` switch
    pub fn from_recurse_flag(recurse: bool) -> Self {
        if recurse {
            Self::MultiScope
        } else {
            Self::SingleScope
        }
    }
}

/// Traversal over the packages below one root directory
#[derive(Debug)]
pub struct Traversal<'a> {
    root: &'a Path,
    mode: ScopeMode,
    boundary: &'a PackageBoundary,
}

impl<'a> Traversal<'a> {
    /// Create a traversal rooted at `root`
    pub fn new(root: &'a Path, mode: ScopeMode, boundary: &'a PackageBoundary) -> Self {
        Self {
            root,
            mode,
            boundary,
        }
    }

    /// List the scopes to process, root first
    pub fn scopes(&self) -> Result<Vec<PathBuf>> {
        check_root(self.root)?;

        let mut scopes = vec![self.root.to_path_buf()];
        if self.mode == ScopeMode::MultiScope {
            scopes.extend(discover_nested_packages(self.root, self.boundary));
        }

        tracing::debug!(root = %self.root.display(), scopes = scopes.len(), "discovered scopes");
        Ok(scopes)
    }

    /// Process every scope, writing a header line before each
    ///
    /// `process` reads and reports one scope. Output errors are always fatal.
    pub fn run<F>(&self, out: &mut dyn Write, mut process: F) -> Result<()>
    where
        F: FnMut(&Path, &mut dyn Write) -> Result<()>,
    {
        for scope in self.scopes()? {
            let label = quote_path(&scope);
            writeln!(out, "{label}:")?;

            match process(&scope, &mut *out) {
                Ok(()) => {}
                Err(err @ CountError::IoError { .. }) => return Err(err),
                Err(err) => match self.mode {
                    ScopeMode::SingleScope => return Err(err),
                    ScopeMode::MultiScope => {
                        tracing::debug!(package = %scope.display(), error = %err, "package failed");
                        writeln!(out, "{err} in package {label}")?;
                    }
                },
            }
        }
        Ok(())
    }
}

/// Fail unless `root` is a directory whose entries can be listed
fn check_root(root: &Path) -> Result<()> {
    let access_failed = |e: std::io::Error| CountError::PackageAccessFailed {
        path: root.display().to_string(),
        reason: e.to_string(),
    };

    let metadata = std::fs::metadata(root).map_err(access_failed)?;
    if !metadata.is_dir() {
        return Err(CountError::NotADirectory {
            path: root.display().to_string(),
        });
    }
    std::fs::read_dir(root).map_err(access_failed)?;
    Ok(())
}

/// Find every directory below `root` that carries the boundary file
///
/// Unreadable directories below the root are skipped with a warning.
fn discover_nested_packages(root: &Path, boundary: &PackageBoundary) -> Vec<PathBuf> {
    let mut packages = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || (entry.file_type().is_dir() && !is_hidden(entry))
        });

    for entry in walker {
        match entry {
            Ok(entry) if boundary.is_package(entry.path()) => packages.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(
                    path = ?err.path(),
                    error = %err,
                    "skipping unreadable directory during package discovery"
                );
            }
        }
    }

    packages.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    packages
}

/// Render a path as a double-quoted, escaped string
fn quote_path(path: &Path) -> String {
    format!("{:?}", path.display().to_string())
}
