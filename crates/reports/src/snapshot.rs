use std::sync::Arc;

use serde::Serialize;

use stockyard_catalog::ItemCatalog;
use stockyard_core::{DomainResult, ItemId};

/// Read-only projection of one item, captured at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
}

/// Builds report snapshots from the live catalog.
///
/// Stateless; each call is one read pass over the catalog in insertion
/// order. Every row is internally consistent (its name and quantity come
/// from a single committed state). The in-memory catalog scan happens under
/// one read lock, so the whole set additionally reflects a single instant;
/// callers should rely only on the row-level guarantee, which is what a
/// persisted backend would promise.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    catalog: Arc<ItemCatalog>,
}

impl SnapshotBuilder {
    pub fn new(catalog: Arc<ItemCatalog>) -> Self {
        Self { catalog }
    }

    pub fn build_snapshot(&self) -> DomainResult<Vec<ReportRow>> {
        Ok(self
            .catalog
            .list()?
            .into_iter()
            .map(|item| ReportRow {
                id: item.id,
                name: item.name,
                quantity: item.quantity,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_matches_catalog_listing_at_a_quiescent_instant() {
        let catalog = Arc::new(ItemCatalog::new());
        catalog.insert("Widget", 10).unwrap();
        catalog.insert("Gadget", 0).unwrap();
        catalog.insert("Gizmo", 3).unwrap();

        let rows = SnapshotBuilder::new(catalog.clone()).build_snapshot().unwrap();
        let items = catalog.list().unwrap();

        assert_eq!(rows.len(), items.len());
        for (row, item) in rows.iter().zip(&items) {
            assert_eq!(row.id, item.id);
            assert_eq!(row.name, item.name);
            assert_eq!(row.quantity, item.quantity);
        }
    }

    #[test]
    fn snapshot_of_empty_catalog_is_empty() {
        let catalog = Arc::new(ItemCatalog::new());
        assert!(SnapshotBuilder::new(catalog).build_snapshot().unwrap().is_empty());
    }
}
