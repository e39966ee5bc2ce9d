//! Submit Order Use Case
//!
//! The execution pipeline: validate, authorize, price, check, commit.
//! Rejections are terminal and leave the ledger untouched; only a version
//! conflict during commit causes the pipeline to rerun.

use std::sync::Arc;

use crate::application::dto::{OrderDto, SubmitOrderDto, SubmitOrderResponseDto};
use crate::application::ports::{ControlStorePort, LedgerError, LedgerPort};
use crate::domain::controls::TradingGate;
use crate::domain::conversion::{CurrencyConverter, RateProvider};
use crate::domain::holdings::HoldingsCalculator;
use crate::domain::orders::{OrderDraft, OrderSide};
use crate::domain::settlement::SettlementError;
use crate::domain::shared::{AccountId, Money, Quantity, Symbol};

/// Commit attempts before giving up with a concurrency conflict.
///
/// Each retry reruns the whole pipeline against fresh state, so controls
/// flipped mid-flight are honored on the rerun.
const MAX_COMMIT_ATTEMPTS: u32 = 3;

/// Use case for executing an order against the ledger.
pub struct SubmitOrderUseCase<L, C, R>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    ledger: Arc<L>,
    controls: Arc<C>,
    converter: CurrencyConverter<R>,
}

impl<L, C, R> SubmitOrderUseCase<L, C, R>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    /// Create a new SubmitOrderUseCase.
    pub const fn new(ledger: Arc<L>, controls: Arc<C>, converter: CurrencyConverter<R>) -> Self {
        Self {
            ledger,
            controls,
            converter,
        }
    }

    /// Execute the pipeline for one order.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`SettlementError`]; see the rejection
    /// taxonomy for the full set.
    pub async fn execute(
        &self,
        account_id: AccountId,
        dto: SubmitOrderDto,
    ) -> Result<SubmitOrderResponseDto, SettlementError> {
        // Structural validation is attempt-invariant and runs once.
        let quantity = Quantity::try_from_decimal(dto.quantity).map_err(|e| {
            SettlementError::InvalidQuantity {
                message: e.to_string(),
            }
        })?;
        let symbol = Symbol::new(&dto.symbol);
        symbol
            .validate()
            .map_err(|_| SettlementError::SymbolNotFound {
                symbol: symbol.clone(),
            })?;
        let draft = OrderDraft {
            account_id: account_id.clone(),
            symbol: symbol.clone(),
            display_name: dto.display_name,
            unit_price: Money::new(dto.unit_price),
            quantity,
            exchange: dto.exchange,
            side: dto.side,
        };
        draft
            .validate()
            .map_err(|e| SettlementError::InvalidPrice {
                message: e.to_string(),
            })?;

        for attempt in 1..=MAX_COMMIT_ATTEMPTS {
            let account = self.ledger.find_account(&account_id).await.ok_or_else(|| {
                SettlementError::AccountNotFound {
                    account_id: account_id.clone(),
                }
            })?;

            let controls = self.controls.market_controls().await;
            let symbol_status = self.controls.symbol_status(&symbol).await.ok_or_else(|| {
                SettlementError::SymbolNotFound {
                    symbol: symbol.clone(),
                }
            })?;
            TradingGate::check(controls, symbol_status, &symbol, &account)?;

            let settlement_value =
                self.converter
                    .settlement_value(draft.unit_price, quantity, draft.exchange);

            match draft.side {
                OrderSide::Buy => {
                    if account.would_overdraw(-settlement_value) {
                        return Err(SettlementError::InsufficientFunds {
                            needed: settlement_value,
                            available: account.balance,
                        });
                    }
                }
                OrderSide::Sell => {
                    let history = self.ledger.orders_for_symbol(&account_id, &symbol).await;
                    let held = HoldingsCalculator::position(&history, &symbol);
                    if quantity.as_i64() > held {
                        return Err(SettlementError::InsufficientHoldings {
                            requested: quantity.as_i64(),
                            held,
                        });
                    }
                }
            }

            let order = draft.clone().into_order(settlement_value);
            match self.ledger.commit_order(account.version, &order).await {
                Ok(balance) => {
                    tracing::info!(
                        order_id = %order.id,
                        account_id = %account_id,
                        symbol = %symbol,
                        side = %order.side,
                        settlement_value = %settlement_value,
                        "Order committed"
                    );
                    return Ok(SubmitOrderResponseDto {
                        order: OrderDto::from_order(&order),
                        balance: balance.amount(),
                    });
                }
                Err(LedgerError::VersionConflict { .. }) => {
                    tracing::warn!(
                        account_id = %account_id,
                        attempt,
                        "Version conflict during commit, rerunning pipeline"
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
}
