//! Per-item mutual exclusion with a bounded acquisition wait.

use std::collections::HashSet;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use stockyard_core::{DomainError, DomainResult, ItemId};

/// Lock table keyed by item id.
///
/// [`ItemLockTable::acquire`] blocks until the item is free or the timeout
/// elapses; the returned guard releases on drop and wakes waiters, so a lock
/// cannot stay held past the commit path that took it. Holders of different
/// item ids only contend on the brief table mutex, never on each other.
#[derive(Debug, Default)]
pub struct ItemLockTable {
    held: Mutex<HashSet<ItemId>>,
    freed: Condvar,
}

impl ItemLockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the exclusive lock for `item_id`, waiting at most `timeout`.
    ///
    /// Exceeding the wait surfaces `Busy`, never a silent fallthrough.
    pub fn acquire(&self, item_id: ItemId, timeout: Duration) -> DomainResult<ItemLockGuard<'_>> {
        let deadline = Instant::now() + timeout;
        let mut held = self
            .held
            .lock()
            .map_err(|_| DomainError::commit_failure("item lock table poisoned"))?;

        while held.contains(&item_id) {
            let now = Instant::now();
            if now >= deadline {
                return Err(DomainError::busy(format!(
                    "timed out waiting for item {item_id}"
                )));
            }
            let (guard, wait) = self
                .freed
                .wait_timeout(held, deadline - now)
                .map_err(|_| DomainError::commit_failure("item lock table poisoned"))?;
            held = guard;
            if wait.timed_out() && held.contains(&item_id) {
                return Err(DomainError::busy(format!(
                    "timed out waiting for item {item_id}"
                )));
            }
        }

        held.insert(item_id);
        Ok(ItemLockGuard {
            table: self,
            item_id,
        })
    }
}

/// Exclusive access to one item's commit path.
#[derive(Debug)]
pub struct ItemLockGuard<'a> {
    table: &'a ItemLockTable,
    item_id: ItemId,
}

impl Drop for ItemLockGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut held) = self.table.held.lock() {
            held.remove(&self.item_id);
        }
        self.table.freed.notify_all();
    }
}
