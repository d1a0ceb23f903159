//! Append-only audit trail of committed stock transactions.
//!
//! There is deliberately no update or delete operation anywhere in this
//! module: once appended, an entry is immutable and its sequence number is
//! never reused.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult, ItemId};

use crate::validator::TransactionKind;

/// Immutable record of one committed transaction.
///
/// `item_name` is captured at commit time; renaming or deleting the live item
/// later does not touch history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Commit order. Starts at 1, strictly increasing.
    pub seq: u64,
    pub item_id: ItemId,
    pub item_name: String,
    pub kind: TransactionKind,
    pub amount: i64,
    /// Actor or recipient label supplied with the transaction, if any.
    pub actor: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub resulting_quantity: i64,
}

/// What the engine hands to [`AuditLog::append`]; the log assigns `seq`.
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub item_id: ItemId,
    pub item_name: String,
    pub kind: TransactionKind,
    pub amount: i64,
    pub actor: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub resulting_quantity: i64,
}

#[derive(Debug, Default)]
struct LogState {
    entries: Vec<AuditEntry>,
    last_seq: u64,
}

/// In-memory append-only audit log.
#[derive(Debug, Default)]
pub struct AuditLog {
    state: RwLock<LogState>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry, assigning the next sequence number.
    ///
    /// Called only by the ledger engine, under the per-item lock of the
    /// transaction being committed.
    pub fn append(&self, new: NewAuditEntry) -> DomainResult<AuditEntry> {
        let mut state = self.write()?;
        state.last_seq += 1;
        let entry = AuditEntry {
            seq: state.last_seq,
            item_id: new.item_id,
            item_name: new.item_name,
            kind: new.kind,
            amount: new.amount,
            actor: new.actor,
            timestamp: new.timestamp,
            resulting_quantity: new.resulting_quantity,
        };
        state.entries.push(entry.clone());
        Ok(entry)
    }

    /// All entries, in commit order.
    pub fn list_all(&self) -> DomainResult<Vec<AuditEntry>> {
        Ok(self.read()?.entries.clone())
    }

    /// Entries for one item, in commit order.
    pub fn list_for_item(&self, item_id: ItemId) -> DomainResult<Vec<AuditEntry>> {
        Ok(self
            .read()?
            .entries
            .iter()
            .filter(|e| e.item_id == item_id)
            .cloned()
            .collect())
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, LogState>> {
        self.state
            .read()
            .map_err(|_| DomainError::commit_failure("audit log lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, LogState>> {
        self.state
            .write()
            .map_err(|_| DomainError::commit_failure("audit log lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(item_id: u64, amount: i64, resulting: i64) -> NewAuditEntry {
        NewAuditEntry {
            item_id: ItemId::new(item_id),
            item_name: "Widget".to_string(),
            kind: TransactionKind::Withdraw,
            amount,
            actor: None,
            timestamp: Utc::now(),
            resulting_quantity: resulting,
        }
    }

    #[test]
    fn append_assigns_monotonic_sequence_numbers() {
        let log = AuditLog::new();
        let a = log.append(new_entry(1, 3, 7)).unwrap();
        let b = log.append(new_entry(1, 2, 5)).unwrap();
        let c = log.append(new_entry(2, 1, 0)).unwrap();
        assert_eq!((a.seq, b.seq, c.seq), (1, 2, 3));
    }

    #[test]
    fn list_for_item_filters_in_commit_order() {
        let log = AuditLog::new();
        log.append(new_entry(1, 3, 7)).unwrap();
        log.append(new_entry(2, 1, 9)).unwrap();
        log.append(new_entry(1, 2, 5)).unwrap();

        let entries = log.list_for_item(ItemId::new(1)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].seq, 1);
        assert_eq!(entries[1].seq, 3);
    }

    #[test]
    fn entries_are_stable_across_unrelated_appends() {
        let log = AuditLog::new();
        log.append(new_entry(1, 3, 7)).unwrap();
        let before = log.list_all().unwrap();

        log.append(new_entry(2, 1, 4)).unwrap();
        log.append(new_entry(3, 5, 5)).unwrap();

        let after = log.list_all().unwrap();
        assert_eq!(&after[..before.len()], &before[..]);
    }
}
