//! List Orders Use Case

use std::sync::Arc;

use crate::application::dto::{ListOrdersResponseDto, OrderDto};
use crate::application::ports::LedgerPort;
use crate::domain::settlement::SettlementError;
use crate::domain::shared::AccountId;

/// Use case for reading an account's committed order history.
pub struct ListOrdersUseCase<L: LedgerPort> {
    ledger: Arc<L>,
}

impl<L: LedgerPort> ListOrdersUseCase<L> {
    /// Create a new ListOrdersUseCase.
    pub const fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Return the account's orders, oldest first.
    ///
    /// # Errors
    ///
    /// [`SettlementError::AccountNotFound`] if the account does not exist.
    pub async fn execute(
        &self,
        account_id: AccountId,
    ) -> Result<ListOrdersResponseDto, SettlementError> {
        if self.ledger.find_account(&account_id).await.is_none() {
            return Err(SettlementError::AccountNotFound { account_id });
        }
        let orders = self
            .ledger
            .orders_for_account(&account_id)
            .await
            .iter()
            .map(OrderDto::from_order)
            .collect();
        Ok(ListOrdersResponseDto { orders })
    }
}
