//! Immutable order records.

use serde::{Deserialize, Serialize};

use super::{Exchange, OrderSide};
use crate::domain::shared::{AccountId, DomainError, Money, OrderId, Quantity, Symbol, Timestamp};

/// A validated order awaiting pricing and commit.
///
/// A draft has passed structural validation (positive whole quantity,
/// positive price) but carries no settlement value yet; that is computed by
/// the currency converter once the native exchange is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Owning account.
    pub account_id: AccountId,
    /// Instrument symbol, normalized uppercase.
    pub symbol: Symbol,
    /// Human-readable instrument name as quoted at submission.
    pub display_name: String,
    /// Per-share price in the exchange's native currency.
    pub unit_price: Money,
    /// Whole-share quantity.
    pub quantity: Quantity,
    /// Exchange the quote came from.
    pub exchange: Exchange,
    /// Buy or sell.
    pub side: OrderSide,
}

impl OrderDraft {
    /// Validate the draft's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns error if the unit price is not a usable order amount.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.unit_price.validate_for_order()?;
        Ok(())
    }

    /// Seal the draft into a committed order record.
    #[must_use]
    pub fn into_order(self, settlement_value: Money) -> Order {
        Order {
            id: OrderId::generate(),
            account_id: self.account_id,
            symbol: self.symbol,
            display_name: self.display_name,
            unit_price: self.unit_price,
            quantity: self.quantity,
            exchange: self.exchange,
            side: self.side,
            settlement_value,
            created_at: Timestamp::now(),
        }
    }
}

/// A committed order.
///
/// Orders are append-only facts: once committed they are never mutated or
/// deleted. Holdings are derived by folding over an account's order history,
/// so every field here is part of the permanent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Owning account.
    pub account_id: AccountId,
    /// Instrument symbol, normalized uppercase.
    pub symbol: Symbol,
    /// Human-readable instrument name as quoted at submission.
    pub display_name: String,
    /// Per-share price in the exchange's native currency.
    pub unit_price: Money,
    /// Whole-share quantity.
    pub quantity: Quantity,
    /// Exchange the quote came from.
    pub exchange: Exchange,
    /// Buy or sell.
    pub side: OrderSide,
    /// Total settlement value in INR, rounded half-even to 2 decimals.
    pub settlement_value: Money,
    /// Commit time.
    pub created_at: Timestamp,
}

impl Order {
    /// Signed share delta this order contributes to the account's position
    /// in its symbol.
    #[must_use]
    pub fn signed_shares(&self) -> i64 {
        self.side.holdings_sign() * self.quantity.as_i64()
    }

    /// Signed cash delta this order applied to the account balance.
    #[must_use]
    pub fn balance_delta(&self) -> Money {
        match self.side {
            OrderSide::Buy => -self.settlement_value,
            OrderSide::Sell => self.settlement_value,
        }
    }
}
