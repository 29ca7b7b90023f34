//! Tracing and logging setup shared by whatever embeds the inventory.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the process, through [`init`].

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
