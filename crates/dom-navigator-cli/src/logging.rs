//! Diagnostic logging setup
//!
//! Events go to stderr so stdout carries only query results. `RUST_LOG`
//! overrides the level derived from `-q` / `-v`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Build the event filter for `verbosity`, preferring `RUST_LOG` when set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
