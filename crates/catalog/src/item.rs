use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult, ItemId};

/// A warehouse stock keeping unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Current on-hand quantity. Never negative in any committed state.
    pub quantity: i64,
}

#[derive(Debug, Default)]
struct CatalogState {
    items: BTreeMap<ItemId, Item>,
    last_id: u64,
}

/// In-memory item catalog.
///
/// Ids are assigned sequentially and never reused, so `BTreeMap` iteration
/// order equals insertion order (stable for reports).
#[derive(Debug, Default)]
pub struct ItemCatalog {
    state: RwLock<CatalogState>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        let state = self.read()?;
        state.items.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    /// All items in insertion order.
    pub fn list(&self) -> DomainResult<Vec<Item>> {
        Ok(self.read()?.items.values().cloned().collect())
    }

    /// Create an item with a fresh id.
    pub fn insert(&self, name: &str, quantity: i64) -> DomainResult<Item> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name must not be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::invalid_argument(
                "initial quantity must not be negative",
            ));
        }

        let mut state = self.write()?;
        state.last_id += 1;
        let item = Item {
            id: ItemId::new(state.last_id),
            name: name.to_string(),
            quantity,
        };
        state.items.insert(item.id, item.clone());
        Ok(item)
    }

    pub fn delete(&self, id: ItemId) -> DomainResult<()> {
        let mut state = self.write()?;
        match state.items.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound),
        }
    }

    /// Overwrite an item's quantity after the transaction validator has
    /// accepted the change. Ledger commit path only.
    ///
    /// `NotFound` here means the item vanished between the engine's read and
    /// this write; the engine reports that as a failed commit, never as a
    /// silent no-op.
    pub fn apply_quantity(&self, id: ItemId, new_quantity: i64) -> DomainResult<()> {
        let mut state = self.write()?;
        match state.items.get_mut(&id) {
            Some(item) => {
                item.quantity = new_quantity;
                Ok(())
            }
            None => Err(DomainError::NotFound),
        }
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, CatalogState>> {
        self.state
            .read()
            .map_err(|_| DomainError::commit_failure("catalog lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, CatalogState>> {
        self.state
            .write()
            .map_err(|_| DomainError::commit_failure("catalog lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn insert_assigns_sequential_ids() {
        let catalog = ItemCatalog::new();
        let a = catalog.insert("Widget", 10).unwrap();
        let b = catalog.insert("Gadget", 0).unwrap();
        assert_eq!(a.id, ItemId::new(1));
        assert_eq!(b.id, ItemId::new(2));
    }

    #[test]
    fn empty_or_whitespace_name_is_rejected() {
        let catalog = ItemCatalog::new();
        for name in ["", "   ", "\t\n"] {
            let err = catalog.insert(name, 5).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
        assert!(catalog.list().unwrap().is_empty());
    }

    #[test]
    fn negative_initial_quantity_is_rejected() {
        let catalog = ItemCatalog::new();
        let err = catalog.insert("Widget", -1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn get_returns_inserted_item() {
        let catalog = ItemCatalog::new();
        let item = catalog.insert("Widget", 10).unwrap();
        assert_eq!(catalog.get(item.id).unwrap(), item);
    }

    #[test]
    fn get_missing_item_is_not_found() {
        let catalog = ItemCatalog::new();
        assert_eq!(catalog.get(ItemId::new(999)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn delete_missing_item_is_not_found() {
        let catalog = ItemCatalog::new();
        assert_eq!(catalog.delete(ItemId::new(999)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn delete_is_not_idempotent_silently() {
        let catalog = ItemCatalog::new();
        let item = catalog.insert("Widget", 10).unwrap();
        catalog.delete(item.id).unwrap();
        // Second delete reports NotFound, not silent success.
        assert_eq!(catalog.delete(item.id).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn apply_quantity_on_missing_item_is_not_found() {
        let catalog = ItemCatalog::new();
        let err = catalog.apply_quantity(ItemId::new(1), 5).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let catalog = ItemCatalog::new();
        let a = catalog.insert("Widget", 1).unwrap();
        catalog.delete(a.id).unwrap();
        let b = catalog.insert("Gadget", 1).unwrap();
        assert!(b.id > a.id);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: `list()` returns items in insertion order with strictly
        /// increasing ids, regardless of the inserted names/quantities.
        #[test]
        fn list_preserves_insertion_order(
            inputs in prop::collection::vec(("[a-z]{1,8}", 0i64..1_000), 1..20)
        ) {
            let catalog = ItemCatalog::new();
            let mut inserted = Vec::new();
            for (name, quantity) in &inputs {
                inserted.push(catalog.insert(name, *quantity).unwrap());
            }

            let listed = catalog.list().unwrap();
            prop_assert_eq!(&listed, &inserted);
            for pair in listed.windows(2) {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
