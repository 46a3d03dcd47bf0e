//! kcount - count configuration resources by kind
//!
//! Counts the YAML/JSON resources of a package directory, and of every nested package
//! below it, grouped by their declared `kind`. Resources can also be piped on standard
//! input.
//!
//! The pipeline is:
//! - [`package`]: resolves which file marks a package directory
//! - [`traversal`]: enumerates package scopes and isolates per-package failures
//! - [`resource`]: reads and parses the documents of one scope
//! - [`aggregate`]: writes the per-scope report

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod package;
pub mod resource;
pub mod traversal;

pub use error::{CountError, Result};
