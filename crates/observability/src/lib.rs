//! Tracing/logging setup shared by the cashbook binaries.

pub mod tracing;

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}
