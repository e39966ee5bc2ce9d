//! In-memory ledger adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{LedgerError, LedgerPort};
use crate::domain::accounts::{Account, AccountStatus, CashTransfer};
use crate::domain::orders::Order;
use crate::domain::shared::{AccountId, Money, Symbol};

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<AccountId, Account>,
    orders: Vec<Order>,
    transfers: Vec<CashTransfer>,
}

/// In-memory implementation of `LedgerPort`.
///
/// All state sits behind a single lock so a commit observes and mutates the
/// account, its version, and the history in one critical section. Account
/// administration (opening, suspension) happens through adapter methods,
/// not through the port.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    inner: RwLock<Inner>,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Open an active account with the given starting balance.
    pub fn open_account(&self, account_id: AccountId, balance: Money) {
        let mut inner = self.inner.write().unwrap();
        inner
            .accounts
            .insert(account_id.clone(), Account::open(account_id, balance));
    }

    /// Set an account's administrative standing.
    pub fn set_account_status(&self, account_id: &AccountId, status: AccountStatus) {
        let mut inner = self.inner.write().unwrap();
        if let Some(account) = inner.accounts.get_mut(account_id) {
            account.status = status;
        }
    }

    /// Number of committed orders across all accounts.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.inner.read().unwrap().orders.len()
    }
}

#[async_trait]
impl LedgerPort for InMemoryLedger {
    async fn find_account(&self, account_id: &AccountId) -> Option<Account> {
        self.inner.read().unwrap().accounts.get(account_id).cloned()
    }

    async fn orders_for_account(&self, account_id: &AccountId) -> Vec<Order> {
        self.inner
            .read()
            .unwrap()
            .orders
            .iter()
            .filter(|o| &o.account_id == account_id)
            .cloned()
            .collect()
    }

    async fn orders_for_symbol(&self, account_id: &AccountId, symbol: &Symbol) -> Vec<Order> {
        self.inner
            .read()
            .unwrap()
            .orders
            .iter()
            .filter(|o| &o.account_id == account_id && &o.symbol == symbol)
            .cloned()
            .collect()
    }

    async fn commit_order(
        &self,
        expected_version: u64,
        order: &Order,
    ) -> Result<Money, LedgerError> {
        let mut inner = self.inner.write().unwrap();
        let account =
            inner
                .accounts
                .get_mut(&order.account_id)
                .ok_or(LedgerError::AccountNotFound {
                    account_id: order.account_id.clone(),
                })?;
        if account.version != expected_version {
            return Err(LedgerError::VersionConflict {
                account_id: order.account_id.clone(),
            });
        }
        let next = account.balance + order.balance_delta();
        // Re-checked under the lock: the balance may have shrunk since the
        // caller's read passed its funds check.
        if next.is_negative() {
            return Err(LedgerError::InsufficientFunds {
                needed: order.settlement_value,
                available: account.balance,
            });
        }
        account.balance = next;
        account.version += 1;
        inner.orders.push(order.clone());
        Ok(next)
    }

    async fn transfers_for_account(&self, account_id: &AccountId) -> Vec<CashTransfer> {
        self.inner
            .read()
            .unwrap()
            .transfers
            .iter()
            .filter(|t| &t.account_id == account_id)
            .cloned()
            .collect()
    }

    async fn commit_transfer(
        &self,
        expected_version: u64,
        transfer: &CashTransfer,
    ) -> Result<Money, LedgerError> {
        let mut inner = self.inner.write().unwrap();
        let account = inner.accounts.get_mut(&transfer.account_id).ok_or(
            LedgerError::AccountNotFound {
                account_id: transfer.account_id.clone(),
            },
        )?;
        if account.version != expected_version {
            return Err(LedgerError::VersionConflict {
                account_id: transfer.account_id.clone(),
            });
        }
        let next = account.balance + transfer.balance_delta();
        if next.is_negative() {
            return Err(LedgerError::InsufficientFunds {
                needed: transfer.amount,
                available: account.balance,
            });
        }
        account.balance = next;
        account.version += 1;
        inner.transfers.push(transfer.clone());
        Ok(next)
    }
}
