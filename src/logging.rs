// ==========================================
// Logging initialization
// ==========================================
// tracing + tracing-subscriber, level configurable via environment
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system.
///
/// # Environment
/// - RUST_LOG: level filter (default: info)
///   e.g. RUST_LOG=debug or RUST_LOG=substitute_scheduler=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialize logging for tests: more verbose, test writer, re-init safe.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
