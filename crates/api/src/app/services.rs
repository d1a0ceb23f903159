use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use stockyard_catalog::ItemCatalog;
use stockyard_ledger::{AuditLog, StockLedger, DEFAULT_LOCK_TIMEOUT};
use stockyard_reports::{PlainTextRenderer, ReportRenderer, SnapshotBuilder};

/// Shared application services, constructed once at startup and passed to
/// handlers explicitly. No ambient singletons: the catalog and audit log are
/// owned here and the ledger mediates between them.
pub struct AppServices {
    pub catalog: Arc<ItemCatalog>,
    pub audit: Arc<AuditLog>,
    pub ledger: StockLedger,
    pub snapshots: SnapshotBuilder,
    pub renderer: Box<dyn ReportRenderer>,
}

impl AppServices {
    /// In-memory wiring with the built-in text renderer and default lock
    /// timeout.
    pub fn in_memory() -> Self {
        Self::new(Box::new(PlainTextRenderer), DEFAULT_LOCK_TIMEOUT)
    }

    pub fn new(renderer: Box<dyn ReportRenderer>, lock_timeout: Duration) -> Self {
        let catalog = Arc::new(ItemCatalog::new());
        let audit = Arc::new(AuditLog::new());
        let ledger = StockLedger::with_lock_timeout(catalog.clone(), audit.clone(), lock_timeout);
        let snapshots = SnapshotBuilder::new(catalog.clone());
        Self {
            catalog,
            audit,
            ledger,
            snapshots,
            renderer,
        }
    }
}

/// Resolve the per-item lock timeout from an optional `LOCK_TIMEOUT_MS`
/// value, falling back to the ledger default when unset.
pub fn lock_timeout_from(raw: Option<&str>) -> anyhow::Result<Duration> {
    match raw {
        Some(raw) => {
            let ms: u64 = raw
                .trim()
                .parse()
                .context("LOCK_TIMEOUT_MS must be an integer number of milliseconds")?;
            Ok(Duration::from_millis(ms))
        }
        None => Ok(DEFAULT_LOCK_TIMEOUT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_timeout_defaults_when_unset() {
        assert_eq!(lock_timeout_from(None).unwrap(), DEFAULT_LOCK_TIMEOUT);
    }

    #[test]
    fn lock_timeout_parses_milliseconds() {
        assert_eq!(
            lock_timeout_from(Some("250")).unwrap(),
            Duration::from_millis(250)
        );
        assert_eq!(
            lock_timeout_from(Some(" 1000 ")).unwrap(),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn lock_timeout_rejects_non_numeric_input() {
        let err = lock_timeout_from(Some("soon")).unwrap_err();
        assert!(err.to_string().contains("LOCK_TIMEOUT_MS"));
    }
}
