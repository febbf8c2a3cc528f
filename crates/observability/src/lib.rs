//! Log setup for the `gildedrose` binaries.
//!
//! Two entry points, one per line format. Both write to stderr and take their
//! filter from `RUST_LOG`. Only the first call in a process installs a
//! subscriber.

/// Human-readable log lines.
pub fn init() {
    tracing::init();
}

/// JSON log lines with timestamps.
pub fn init_json() {
    tracing::init_json();
}

/// Subscriber construction behind [`init`] and [`init_json`].
pub mod tracing;
