//! Tracing setup for embedding applications.

use tracing_subscriber::EnvFilter;

/// Initializes a global `tracing` subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `default_filter`.
/// Safe to call more than once; later calls are no-ops (useful in tests).
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
