//! Diagnostic tracing for the CLI.
//!
//! Log lines go to stderr so they never mix with the JSON printed on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Falls back to `default_filter` (from config) if unset
/// or unparsable. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=nested_utils=debug nested-utils fetch https://example.com/data.json
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
