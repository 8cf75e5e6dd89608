//! Diagnostic logging for the CLI.
//!
//! Log events go to stderr so stdout carries only the check outcome.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `prlint=debug`.
pub const LOG_FILTER_ENV: &str = "PRLINT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// A subscriber installed earlier (for example by a test harness) is kept.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
