//! `stockyard-catalog` — the item catalog: the single owner of stock items.
//!
//! Quantity mutation goes through [`ItemCatalog::apply_quantity`], which only
//! the ledger engine calls after a transaction has been validated.

pub mod item;

pub use item::{Item, ItemCatalog};
