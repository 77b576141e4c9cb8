//! `tillbook-observability` — tracing/logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with an explicit filter directive, ignoring `RUST_LOG`.
pub fn init_with_filter(directive: &str) {
    tracing::init_with_filter(directive);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
