//! Tracing/logging initialization.

use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::EnvFilter;

/// Level directive applied when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "info";

/// Install the process-wide subscriber: JSON lines with system timestamps,
/// levels taken from `RUST_LOG`.
///
/// A global subscriber can be set only once, so repeated calls quietly
/// become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(SystemTime)
        .with_target(false)
        .json()
        .try_init();
}
