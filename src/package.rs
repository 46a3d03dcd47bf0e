//! Package boundary naming
//!
//! A **package** is a directory carrying a sentinel file. The sentinel's name is not fixed:
//! it comes from a [`PackageNaming`] policy so callers can inject their own convention, and
//! resolving it can fail before any directory is read.

use std::path::Path;

use crate::error::{CountError, Result};

/// Default name of the file that marks a package directory
pub const DEFAULT_PACKAGE_FILE: &str = "Krmfile";

/// Strategy that decides which file name marks a package boundary
pub trait PackageNaming {
    /// Resolve the sentinel file name
    fn resolve(&self) -> Result<String>;
}

/// Naming policy backed by an optional explicit name (flag or environment)
#[derive(Debug, Clone, Default)]
pub struct NamingPolicy {
    explicit: Option<String>,
}

impl NamingPolicy {
    /// Create a policy that prefers `explicit` over [`DEFAULT_PACKAGE_FILE`]
    pub fn new(explicit: Option<String>) -> Self {
        Self { explicit }
    }
}

impl PackageNaming for NamingPolicy {
    fn resolve(&self) -> Result<String> {
        let name = self.explicit.as_deref().unwrap_or(DEFAULT_PACKAGE_FILE);
        validate_file_name(name)?;
        Ok(name.to_string())
    }
}

/// Check that `name` is a single path component
fn validate_file_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("must not be empty")
    } else if name == "." || name == ".." {
        Some("must name a file, not a directory reference")
    } else if name.contains('/') || name.contains('\\') {
        Some("must not contain a path separator")
    } else if name.contains('\0') {
        Some("must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CountError::InvalidPackageFileName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Resolved package boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageBoundary {
    file_name: String,
}

impl PackageBoundary {
    /// Resolve the boundary through a naming policy
    pub fn resolve(naming: &dyn PackageNaming) -> Result<Self> {
        let file_name = naming.resolve()?;
        tracing::debug!(file_name = %file_name, "resolved package boundary");
        Ok(Self { file_name })
    }

    /// The sentinel file name
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether `dir` is the root of a package
    pub fn is_package(&self, dir: &Path) -> bool {
        dir.join(&self.file_name).is_file()
    }
}
