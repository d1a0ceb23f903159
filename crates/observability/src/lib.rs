//! Process-wide tracing/logging setup shared by the binaries.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call more than once; later calls become no-ops.
pub fn init() {
    tracing::init();
}
