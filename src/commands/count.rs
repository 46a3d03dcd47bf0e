//! Count command implementation
//!
//! Without a path, resources are read from standard input and counted as one scope.
//! With a path, every package scope below it is counted via [`Traversal`].

use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::aggregate::{CountMode, write_report};
use crate::cli::Cli;
use crate::error::Result;
use crate::package::{NamingPolicy, PackageBoundary};
use crate::resource::{FileMatcher, read_package, read_stream};
use crate::traversal::{ScopeMode, Traversal};

/// Resolved settings for one count run
#[derive(Debug)]
pub struct CountOptions {
    pub mode: CountMode,
    pub scope_mode: ScopeMode,
    pub boundary: PackageBoundary,
    pub matcher: FileMatcher,
}

impl CountOptions {
    /// Resolve options from parsed arguments
    ///
    /// Fails when the package file name or a file pattern is invalid, before any input
    /// is read.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let boundary = PackageBoundary::resolve(&NamingPolicy::new(cli.package_file.clone()))?;
        let matcher = if cli.match_patterns.is_empty() {
            FileMatcher::default()
        } else {
            FileMatcher::new(cli.match_patterns.as_slice())?
        };

        Ok(Self {
            mode: CountMode::from_kind_flag(cli.kind),
            scope_mode: ScopeMode::from_recurse_flag(cli.recurse_subpackages),
            boundary,
            matcher,
        })
    }
}

/// Run count command against the process's stdin and stdout
pub fn run(cli: &Cli) -> Result<()> {
    let options = CountOptions::from_cli(cli)?;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = execute(cli.path.as_deref(), &options, std::io::stdin().lock(), &mut out);
    // Keep whatever was reported before a fatal error
    out.flush()?;
    result
}

/// Count resources from `path`, or from `input` when no path is given
pub fn execute<R: Read>(
    path: Option<&Path>,
    options: &CountOptions,
    input: R,
    out: &mut dyn Write,
) -> Result<()> {
    match path {
        None => {
            let records = read_stream(input)?;
            write_report(options.mode, &records, out)
        }
        Some(root) => {
            tracing::debug!(
                root = %root.display(),
                mode = ?options.mode,
                scope_mode = ?options.scope_mode,
                "counting packages"
            );
            Traversal::new(root, options.scope_mode, &options.boundary).run(
                out,
                |scope, out| {
                    let records = read_package(scope, &options.boundary, &options.matcher)?;
                    write_report(options.mode, &records, out)
                },
            )
        }
    }
}
