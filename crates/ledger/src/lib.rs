//! `stockyard-ledger` — the stock ledger: validation, commit, audit trail.
//!
//! The engine serializes quantity-changing transactions per item, applies
//! accepted results to the catalog, and appends exactly one immutable audit
//! entry per committed transaction.

pub mod audit;
pub mod engine;
pub mod lock;
pub mod validator;

pub use audit::{AuditEntry, AuditLog, NewAuditEntry};
pub use engine::{StockLedger, DEFAULT_LOCK_TIMEOUT};
pub use validator::{validate, Decision, RejectReason, TransactionKind};
