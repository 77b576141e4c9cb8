//! Tracing/logging initialization.
//!
//! The domain crates emit `tracing` events at their state-changing seams;
//! binaries, examples, and test harnesses call in here once to see them.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_with(filter);
}

/// Initialize with an explicit filter directive, ignoring `RUST_LOG`.
pub fn init_with_filter(directive: &str) {
    init_with(EnvFilter::new(directive));
}

fn init_with(filter: EnvFilter) {
    // JSON logs + timestamps; repeated init attempts are swallowed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
