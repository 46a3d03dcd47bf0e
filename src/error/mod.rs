//! Error types and handling for kcount
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into a few groups:
//! - package errors: the root or a package directory cannot be accessed
//! - resource errors: a resource file cannot be read or parsed
//! - naming errors: the package boundary file name cannot be resolved
//! - command line errors: an option value is not understood
//! - output errors: the report sink cannot be written

use miette::Diagnostic;
use thiserror::Error;

use crate::resource::STREAM_LABEL;

/// Main error type for kcount operations
#[derive(Error, Diagnostic, Debug)]
pub enum CountError {
    // Package errors
    #[error("Failed to access package '{path}': {reason}")]
    #[diagnostic(
        code(kcount::package::access_failed),
        help("Check that the path exists and is a readable directory")
    )]
    PackageAccessFailed { path: String, reason: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(
        code(kcount::package::not_a_directory),
        help("Pass a package directory, or pipe resources on standard input")
    )]
    NotADirectory { path: String },

    // Resource errors
    #[error("Failed to read file '{path}': {reason}")]
    #[diagnostic(code(kcount::resource::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to parse resources in '{path}': {reason}")]
    #[diagnostic(
        code(kcount::resource::parse_failed),
        help("Each document must be valid YAML or JSON")
    )]
    ResourceParseFailed { path: String, reason: String },

    // Naming errors
    #[error("Invalid package file name '{name}': {reason}")]
    #[diagnostic(
        code(kcount::naming::invalid_package_file),
        help("Set --package-file or KCOUNT_PACKAGE_FILE to a plain file name such as Krmfile")
    )]
    InvalidPackageFileName { name: String, reason: String },

    #[error("Invalid resource file pattern '{pattern}': {reason}")]
    #[diagnostic(code(kcount::naming::invalid_pattern))]
    InvalidFilePattern { pattern: String, reason: String },

    // Command line errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(kcount::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Output errors
    #[error("IO error: {message}")]
    #[diagnostic(code(kcount::io::error))]
    IoError { message: String },
}

impl From<std::io::Error> for CountError {
    fn from(err: std::io::Error) -> Self {
        CountError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CountError {
    fn from(err: serde_yaml::Error) -> Self {
        CountError::ResourceParseFailed {
            path: STREAM_LABEL.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CountError {
    fn from(err: serde_json::Error) -> Self {
        CountError::ResourceParseFailed {
            path: STREAM_LABEL.to_string(),
            reason: err.to_string(),
        }
    }
}

impl CountError {
    /// Attach the file a parse error came from
    ///
    /// Conversions from the parser errors do not know which file was being read,
    /// so readers re-label them once the path is known.
    #[must_use]
    pub fn in_file(self, file: &str) -> Self {
        match self {
            CountError::ResourceParseFailed { reason, .. } => CountError::ResourceParseFailed {
                path: file.to_string(),
                reason,
            },
            other => other,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CountError>;
