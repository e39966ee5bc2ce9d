//! Ledger Port (Driven Port)
//!
//! Interface to the account ledger: account lookup, append-only order and
//! transfer history, and the versioned commit that applies a balance change
//! and appends the record atomically.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::accounts::{Account, CashTransfer};
use crate::domain::orders::Order;
use crate::domain::shared::{AccountId, Money, Symbol};

/// Errors surfaced by ledger adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The account's version moved between read and commit.
    #[error("Account {account_id} was modified concurrently")]
    VersionConflict {
        /// The contended account.
        account_id: AccountId,
    },

    /// Applying the delta would leave the balance negative.
    ///
    /// Re-checked inside the commit because the balance may have shrunk
    /// since the caller's read.
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds {
        /// Cash the commit needs.
        needed: Money,
        /// Cash actually available.
        available: Money,
    },

    /// No such account.
    #[error("Account not found: {account_id}")]
    AccountNotFound {
        /// The unknown account.
        account_id: AccountId,
    },
}

/// Driven port for the account ledger.
#[async_trait]
pub trait LedgerPort: Send + Sync {
    /// Look up an account by id.
    async fn find_account(&self, account_id: &AccountId) -> Option<Account>;

    /// All committed orders for an account, oldest first.
    async fn orders_for_account(&self, account_id: &AccountId) -> Vec<Order>;

    /// Committed orders for an account in one symbol, oldest first.
    async fn orders_for_symbol(&self, account_id: &AccountId, symbol: &Symbol) -> Vec<Order>;

    /// Atomically apply the order's balance delta and append the record.
    ///
    /// The commit succeeds only if the account's version still equals
    /// `expected_version`; on success the version increments and the new
    /// balance is returned.
    ///
    /// # Errors
    ///
    /// [`LedgerError::VersionConflict`] if the account changed since the
    /// read, [`LedgerError::InsufficientFunds`] if the delta would overdraw,
    /// [`LedgerError::AccountNotFound`] if the account disappeared.
    async fn commit_order(&self, expected_version: u64, order: &Order)
    -> Result<Money, LedgerError>;

    /// All committed transfers for an account, oldest first.
    async fn transfers_for_account(&self, account_id: &AccountId) -> Vec<CashTransfer>;

    /// Atomically apply the transfer's balance delta and append the record.
    ///
    /// Same versioning contract as [`LedgerPort::commit_order`].
    ///
    /// # Errors
    ///
    /// See [`LedgerPort::commit_order`].
    async fn commit_transfer(
        &self,
        expected_version: u64,
        transfer: &CashTransfer,
    ) -> Result<Money, LedgerError>;
}
