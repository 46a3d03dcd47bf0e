//! CLI definitions using clap derive API

use clap::ArgAction;
use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// kcount - count configuration resources by kind
///
/// Reads resources from DIR (and its nested packages) or from standard input.
#[derive(Parser, Debug)]
#[command(
    name = "kcount",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Count configuration resources by kind",
    long_about = "Count the YAML/JSON resources in a package directory, grouped by kind. \
                  Nested directories carrying the package file are counted as packages of \
                  their own. Without DIR, resources are read from standard input.",
    after_help = "EXAMPLES:\n  \
                  Count resources by kind in a package and its sub-packages:\n    kcount my-package/\n\n\
                  Print only the total per package:\n    kcount my-package/ --kind=false\n\n\
                  Ignore nested packages:\n    kcount my-package/ -R=false\n\n\
                  Count resources piped on standard input:\n    kustomize build . | kcount"
)]
pub struct Cli {
    /// Package directory to count (reads standard input when omitted)
    #[arg(value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Count resources by kind; --kind=false prints a single total
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub kind: bool,

    /// Also count the nested sub-packages of DIR
    #[arg(
        long,
        short = 'R',
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub recurse_subpackages: bool,

    /// Name of the file that marks a package directory [default: Krmfile]
    #[arg(long, value_name = "NAME", env = "KCOUNT_PACKAGE_FILE")]
    pub package_file: Option<String>,

    /// Glob for resource file names (repeatable) [default: *.yaml, *.yml, *.json]
    #[arg(long = "match", value_name = "GLOB")]
    pub match_patterns: Vec<String>,

    /// Enable verbose logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions (bash, elvish, fish, powershell, zsh) and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<String>,
}
