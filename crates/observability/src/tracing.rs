//! Tracing subscriber configuration.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber, filter configurable via `RUST_LOG`
/// (defaults to `info`). Subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
