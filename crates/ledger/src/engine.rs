//! Transaction commit orchestration.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use stockyard_catalog::ItemCatalog;
use stockyard_core::{DomainError, DomainResult, ItemId};

use crate::audit::{AuditEntry, AuditLog, NewAuditEntry};
use crate::lock::ItemLockTable;
use crate::validator::{validate, Decision, RejectReason, TransactionKind};

/// Default bound on waiting for a contended item lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// The commit path for quantity-changing transactions.
///
/// The ledger owns no item or audit state itself; it mediates between the
/// catalog and the audit log and enforces the commit protocol: per-item
/// exclusion is held from the quantity read through the audit append, so the
/// updated quantity and its audit entry become observable together.
///
/// [`StockLedger::commit_transaction`] has no await point and runs to
/// completion once entered; a caller disconnecting mid-request cannot leave
/// the lock held or the commit half-applied.
#[derive(Debug)]
pub struct StockLedger {
    catalog: Arc<ItemCatalog>,
    audit: Arc<AuditLog>,
    locks: ItemLockTable,
    lock_timeout: Duration,
}

impl StockLedger {
    pub fn new(catalog: Arc<ItemCatalog>, audit: Arc<AuditLog>) -> Self {
        Self::with_lock_timeout(catalog, audit, DEFAULT_LOCK_TIMEOUT)
    }

    pub fn with_lock_timeout(
        catalog: Arc<ItemCatalog>,
        audit: Arc<AuditLog>,
        lock_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            audit,
            locks: ItemLockTable::new(),
            lock_timeout,
        }
    }

    pub fn catalog(&self) -> &Arc<ItemCatalog> {
        &self.catalog
    }

    pub fn audit(&self) -> &Arc<AuditLog> {
        &self.audit
    }

    /// Validate and commit one transaction against `item_id`.
    ///
    /// On success both the catalog quantity and the audit trail have been
    /// updated; on any error neither has. Validator rejections and catalog
    /// errors are surfaced verbatim, without wrapping.
    pub fn commit_transaction(
        &self,
        item_id: ItemId,
        kind: TransactionKind,
        amount: i64,
        actor: Option<String>,
    ) -> DomainResult<AuditEntry> {
        let _guard = self.locks.acquire(item_id, self.lock_timeout)?;

        let item = self.catalog.get(item_id)?;

        let new_quantity = match validate(item.quantity, kind, amount) {
            Decision::Accepted { new_quantity } => new_quantity,
            Decision::Rejected(RejectReason::InvalidAmount) => {
                return Err(DomainError::invalid_argument(
                    "amount must be a positive integer",
                ));
            }
            Decision::Rejected(RejectReason::QuantityOverflow) => {
                return Err(DomainError::invalid_argument(
                    "amount would overflow the stock quantity",
                ));
            }
            Decision::Rejected(RejectReason::InsufficientStock { available }) => {
                tracing::debug!(
                    item_id = %item_id,
                    requested = amount,
                    available,
                    "withdrawal rejected"
                );
                return Err(DomainError::InsufficientStock {
                    requested: amount,
                    available,
                });
            }
        };

        // Validation passed. A missing item here means it was deleted after
        // our read; the transaction must fail loudly as a non-commit.
        self.catalog
            .apply_quantity(item_id, new_quantity)
            .map_err(|err| match err {
                DomainError::NotFound => DomainError::commit_failure(format!(
                    "item {item_id} vanished between validation and apply"
                )),
                other => other,
            })?;

        let entry = self.audit.append(NewAuditEntry {
            item_id,
            item_name: item.name,
            kind,
            amount,
            actor,
            timestamp: Utc::now(),
            resulting_quantity: new_quantity,
        })?;

        tracing::debug!(
            item_id = %item_id,
            seq = entry.seq,
            kind = ?kind,
            amount,
            resulting_quantity = new_quantity,
            "transaction committed"
        );

        Ok(entry)
    }
}
