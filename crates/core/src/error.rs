//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Client errors (`InvalidArgument`, `NotFound`, `InsufficientStock`) are
/// terminal and reported verbatim. `Busy` is transient and safe to retry.
/// `CommitFailure` is an internal fault: validation succeeded but the commit
/// could not be applied, and callers must not assume the mutation happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input; the message names the violated constraint.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested item does not exist.
    #[error("not found")]
    NotFound,

    /// A withdrawal exceeded the current on-hand quantity.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// A per-item lock could not be acquired within the bounded wait.
    #[error("busy: {0}")]
    Busy(String),

    /// Internal inconsistency after validation succeeded.
    #[error("commit failure: {0}")]
    CommitFailure(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }

    pub fn commit_failure(msg: impl Into<String>) -> Self {
        Self::CommitFailure(msg.into())
    }
}
