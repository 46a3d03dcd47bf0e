//! Logging setup
//!
//! Reports go to stdout, so diagnostics are only ever written to stderr.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive, e.g. `kcount=debug`
pub const LOG_ENV: &str = "KCOUNT_LOG";

/// Build the filter from `KCOUNT_LOG`, falling back to the verbosity switch
pub fn env_filter(verbose: bool) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref(), verbose)
}

/// Build the filter from a directive, or from the verbosity switch when the
/// directive is absent, blank or invalid
fn filter_from(directive: Option<&str>, verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    directive
        .filter(|directive| !directive.trim().is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Install the global stderr subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logging(verbose: bool) {
    let result = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbose, "logging initialized");
    }
}
