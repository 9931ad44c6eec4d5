//! Logging setup
//!
//! `RUST_LOG` selects levels (default `info`). JSON output is meant for log
//! shippers; the plain format for terminals.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the level filter from `RUST_LOG`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber
///
/// Returns an error if a subscriber is already installed.
pub fn init_tracing(json: bool) -> Result<(), String> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_thread_ids(false);

    if json {
        builder.json().try_init().map_err(|e| e.to_string())
    } else {
        builder.try_init().map_err(|e| e.to_string())
    }
}
