//! Cash transfer records.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountId, Money, Timestamp, TransferId};

/// Direction of a cash transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
    /// Cash into the account.
    Deposit,
    /// Cash out of the account.
    Withdraw,
}

/// A committed cash movement, append-only like orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashTransfer {
    /// Unique transfer identifier.
    pub id: TransferId,
    /// Owning account.
    pub account_id: AccountId,
    /// Deposit or withdrawal.
    pub kind: TransferKind,
    /// Positive amount moved, in the settlement currency.
    pub amount: Money,
    /// Commit time.
    pub created_at: Timestamp,
}

impl CashTransfer {
    /// Record a new transfer of the given kind and amount.
    #[must_use]
    pub fn record(account_id: AccountId, kind: TransferKind, amount: Money) -> Self {
        Self {
            id: TransferId::generate(),
            account_id,
            kind,
            amount,
            created_at: Timestamp::now(),
        }
    }

    /// Signed cash delta this transfer applied to the balance.
    #[must_use]
    pub fn balance_delta(&self) -> Money {
        match self.kind {
            TransferKind::Deposit => self.amount,
            TransferKind::Withdraw => -self.amount,
        }
    }
}
