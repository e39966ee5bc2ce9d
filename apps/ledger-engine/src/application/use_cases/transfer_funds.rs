//! Transfer Funds Use Case
//!
//! Deposits and withdrawals share the ledger's versioned commit with the
//! order pipeline, so a transfer racing an order settles under the same
//! serialization rules.

use std::sync::Arc;

use crate::application::dto::{
    ListTransfersResponseDto, SubmitTransferDto, SubmitTransferResponseDto, TransferDto,
};
use crate::application::ports::{LedgerError, LedgerPort};
use crate::domain::accounts::{CashTransfer, TransferKind};
use crate::domain::settlement::SettlementError;
use crate::domain::shared::{AccountId, Money};

const MAX_COMMIT_ATTEMPTS: u32 = 3;

/// Use case for moving cash in and out of an account.
pub struct TransferFundsUseCase<L: LedgerPort> {
    ledger: Arc<L>,
}

impl<L: LedgerPort> TransferFundsUseCase<L> {
    /// Create a new TransferFundsUseCase.
    pub const fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Execute a deposit or withdrawal.
    ///
    /// # Errors
    ///
    /// Rejects non-positive amounts, suspended and unknown accounts, and
    /// withdrawals past the balance. Retries exhausted under concurrent
    /// commits surface as [`SettlementError::ConcurrencyConflict`].
    pub async fn execute(
        &self,
        account_id: AccountId,
        dto: SubmitTransferDto,
    ) -> Result<SubmitTransferResponseDto, SettlementError> {
        let amount = Money::new(dto.amount);
        amount
            .validate_for_order()
            .map_err(|e| SettlementError::InvalidAmount {
                message: e.to_string(),
            })?;

        for attempt in 1..=MAX_COMMIT_ATTEMPTS {
            let account = self.ledger.find_account(&account_id).await.ok_or_else(|| {
                SettlementError::AccountNotFound {
                    account_id: account_id.clone(),
                }
            })?;
            if account.is_suspended() {
                return Err(SettlementError::AccountSuspended {
                    account_id: account_id.clone(),
                });
            }
            if dto.kind == TransferKind::Withdraw && amount > account.balance {
                return Err(SettlementError::InsufficientFunds {
                    needed: amount,
                    available: account.balance,
                });
            }

            let transfer = CashTransfer::record(account_id.clone(), dto.kind, amount);
            match self.ledger.commit_transfer(account.version, &transfer).await {
                Ok(balance) => {
                    tracing::info!(
                        transfer_id = %transfer.id,
                        account_id = %account_id,
                        kind = ?transfer.kind,
                        amount = %amount,
                        "Transfer committed"
                    );
                    return Ok(SubmitTransferResponseDto {
                        transfer: TransferDto::from_transfer(&transfer),
                        balance: balance.amount(),
                    });
                }
                Err(LedgerError::VersionConflict { .. }) => {
                    tracing::warn!(
                        account_id = %account_id,
                        attempt,
                        "Version conflict during transfer commit, retrying"
                    );
                }
                Err(LedgerError::InsufficientFunds { needed, available }) => {
                    return Err(SettlementError::InsufficientFunds { needed, available });
                }
                Err(LedgerError::AccountNotFound { account_id }) => {
                    return Err(SettlementError::AccountNotFound { account_id });
                }
            }
        }

        Err(SettlementError::ConcurrencyConflict)
    }

    /// Return the account's transfer history, oldest first.
    ///
    /// # Errors
    ///
    /// [`SettlementError::AccountNotFound`] if the account does not exist.
    pub async fn history(
        &self,
        account_id: AccountId,
    ) -> Result<ListTransfersResponseDto, SettlementError> {
        if self.ledger.find_account(&account_id).await.is_none() {
            return Err(SettlementError::AccountNotFound { account_id });
        }
        let transfers = self
            .ledger
            .transfers_for_account(&account_id)
            .await
            .iter()
            .map(TransferDto::from_transfer)
            .collect();
        Ok(ListTransfersResponseDto { transfers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::accounts::{Account, AccountStatus};
    use crate::domain::orders::Order;
    use crate::domain::shared::Symbol;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::RwLock;

    struct MockLedger {
        accounts: RwLock<HashMap<AccountId, Account>>,
        transfers: RwLock<Vec<CashTransfer>>,
    }

    impl MockLedger {
        fn with_account(balance: rust_decimal::Decimal, status: AccountStatus) -> Self {
            let mut accounts = HashMap::new();
            accounts.insert(
                AccountId::new("trader@example.com"),
                Account {
                    id: AccountId::new("trader@example.com"),
                    balance: Money::new(balance),
                    status,
                    version: 0,
                },
            );
            Self {
                accounts: RwLock::new(accounts),
                transfers: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LedgerPort for MockLedger {
        async fn find_account(&self, account_id: &AccountId) -> Option<Account> {
            self.accounts.read().unwrap().get(account_id).cloned()
        }

        async fn orders_for_account(&self, _account_id: &AccountId) -> Vec<Order> {
            Vec::new()
        }

        async fn orders_for_symbol(&self, _account_id: &AccountId, _symbol: &Symbol) -> Vec<Order> {
            Vec::new()
        }

        async fn commit_order(
            &self,
            _expected_version: u64,
            _order: &Order,
        ) -> Result<Money, LedgerError> {
            unimplemented!("orders are exercised by the submit order use case tests")
        }

        async fn transfers_for_account(&self, account_id: &AccountId) -> Vec<CashTransfer> {
            self.transfers
                .read()
                .unwrap()
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
            let mut accounts = self.accounts.write().unwrap();
            let account =
                accounts
                    .get_mut(&transfer.account_id)
                    .ok_or(LedgerError::AccountNotFound {
                        account_id: transfer.account_id.clone(),
                    })?;
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
            self.transfers.write().unwrap().push(transfer.clone());
            Ok(next)
        }
    }

    fn trader() -> AccountId {
        AccountId::new("trader@example.com")
    }

    #[tokio::test]
    async fn deposit_credits_the_balance() {
        let ledger = Arc::new(MockLedger::with_account(dec!(1000), AccountStatus::Active));
        let uc = TransferFundsUseCase::new(Arc::clone(&ledger));

        let response = uc
            .execute(
                trader(),
                SubmitTransferDto {
                    kind: TransferKind::Deposit,
                    amount: dec!(500),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.balance, dec!(1500));
    }

    #[tokio::test]
    async fn withdrawal_past_the_balance_is_refused() {
        let ledger = Arc::new(MockLedger::with_account(dec!(100), AccountStatus::Active));
        let uc = TransferFundsUseCase::new(Arc::clone(&ledger));

        let err = uc
            .execute(
                trader(),
                SubmitTransferDto {
                    kind: TransferKind::Withdraw,
                    amount: dec!(100.01),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SettlementError::InsufficientFunds { .. }));
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected() {
        let ledger = Arc::new(MockLedger::with_account(dec!(100), AccountStatus::Active));
        let uc = TransferFundsUseCase::new(Arc::clone(&ledger));

        let err = uc
            .execute(
                trader(),
                SubmitTransferDto {
                    kind: TransferKind::Deposit,
                    amount: dec!(-5),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SettlementError::InvalidAmount { .. }));
        assert_eq!(err.kind(), "INVALID_AMOUNT");
    }

    #[tokio::test]
    async fn suspended_account_cannot_transfer() {
        let ledger = Arc::new(MockLedger::with_account(
            dec!(1000),
            AccountStatus::Suspended,
        ));
        let uc = TransferFundsUseCase::new(Arc::clone(&ledger));

        let err = uc
            .execute(
                trader(),
                SubmitTransferDto {
                    kind: TransferKind::Deposit,
                    amount: dec!(100),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, SettlementError::AccountSuspended { .. }));
    }

    #[tokio::test]
    async fn history_lists_committed_transfers() {
        let ledger = Arc::new(MockLedger::with_account(dec!(1000), AccountStatus::Active));
        let uc = TransferFundsUseCase::new(Arc::clone(&ledger));

        uc.execute(
            trader(),
            SubmitTransferDto {
                kind: TransferKind::Deposit,
                amount: dec!(500),
            },
        )
        .await
        .unwrap();
        uc.execute(
            trader(),
            SubmitTransferDto {
                kind: TransferKind::Withdraw,
                amount: dec!(200),
            },
        )
        .await
        .unwrap();

        let history = uc.history(trader()).await.unwrap();
        assert_eq!(history.transfers.len(), 2);
        assert_eq!(history.transfers[0].kind, TransferKind::Deposit);
        assert_eq!(history.transfers[1].kind, TransferKind::Withdraw);
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let ledger = Arc::new(MockLedger::with_account(dec!(1000), AccountStatus::Active));
        let uc = TransferFundsUseCase::new(Arc::clone(&ledger));

        let err = uc
            .history(AccountId::new("stranger@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, SettlementError::AccountNotFound { .. }));
    }
}
