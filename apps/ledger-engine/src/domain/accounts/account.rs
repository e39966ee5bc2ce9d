//! Account aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountId, Money};

/// Administrative standing of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account may trade and transfer.
    Active,
    /// Account is administratively frozen; all order submission is refused.
    Suspended,
}

/// A trading account's cash position.
///
/// The balance is the only mutable piece of account state the engine owns.
/// `version` increments on every committed balance change and backs the
/// compare-and-commit step that serializes concurrent settlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    pub id: AccountId,
    /// Available cash in the settlement currency.
    pub balance: Money,
    /// Administrative standing.
    pub status: AccountStatus,
    /// Monotonic commit counter for optimistic concurrency.
    pub version: u64,
}

impl Account {
    /// Open a new active account with the given starting balance.
    #[must_use]
    pub fn open(id: AccountId, balance: Money) -> Self {
        Self {
            id,
            balance,
            status: AccountStatus::Active,
            version: 0,
        }
    }

    /// Whether the account is suspended.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.status == AccountStatus::Suspended
    }

    /// Whether applying the given signed cash delta would leave the balance
    /// negative.
    #[must_use]
    pub fn would_overdraw(&self, delta: Money) -> bool {
        (self.balance + delta).is_negative()
    }
}
