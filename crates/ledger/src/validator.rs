//! Pure accept/reject decision for a proposed stock transaction.

use serde::{Deserialize, Serialize};

/// Direction of a quantity change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Receive,
    Withdraw,
}

/// Outcome of validating a proposed transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { new_quantity: i64 },
    Rejected(RejectReason),
}

/// Why a transaction was not accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Amount was zero or negative.
    InvalidAmount,
    /// Withdrawal exceeds the current on-hand quantity.
    InsufficientStock { available: i64 },
    /// Receipt would overflow the quantity counter.
    QuantityOverflow,
}

/// Decide whether a transaction may be applied to `current_quantity`.
///
/// Deterministic and side-effect free. The engine reads the current quantity
/// under the per-item lock and applies the accepted result; this function
/// only decides.
///
/// Receipts have no domain upper bound but must stay within the quantity
/// counter; withdrawals may never take the quantity below zero.
pub fn validate(current_quantity: i64, kind: TransactionKind, amount: i64) -> Decision {
    if amount <= 0 {
        return Decision::Rejected(RejectReason::InvalidAmount);
    }

    match kind {
        TransactionKind::Receive => match current_quantity.checked_add(amount) {
            Some(new_quantity) => Decision::Accepted { new_quantity },
            None => Decision::Rejected(RejectReason::QuantityOverflow),
        },
        TransactionKind::Withdraw => {
            if amount > current_quantity {
                Decision::Rejected(RejectReason::InsufficientStock {
                    available: current_quantity,
                })
            } else {
                Decision::Accepted {
                    new_quantity: current_quantity - amount,
                }
            }
        }
    }
}
