//! Quantity value object for share counts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Maximum shares per order. Anything above this is a fat-finger, not a trade.
const MAX_ORDER_QUANTITY: u32 = 100_000;

/// A whole-share quantity on an order.
///
/// Fractional shares are disallowed by design: the quantity is a positive
/// integer, validated before any state change. Wire values arrive as
/// decimals and are rejected if they carry a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity from a whole share count.
    ///
    /// # Errors
    ///
    /// Returns error if the count is zero or exceeds the per-order maximum.
    pub fn new(shares: u32) -> Result<Self, DomainError> {
        if shares == 0 {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "Order quantity must be a positive integer".to_string(),
            });
        }
        if shares > MAX_ORDER_QUANTITY {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: format!("Order quantity exceeds maximum: {MAX_ORDER_QUANTITY}"),
            });
        }
        Ok(Self(shares))
    }

    /// Parse a wire decimal into a whole-share quantity.
    ///
    /// # Errors
    ///
    /// Returns error if the value is zero, negative, fractional, or exceeds
    /// the per-order maximum.
    pub fn try_from_decimal(value: Decimal) -> Result<Self, DomainError> {
        if value.fract() != Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: format!("Fractional share quantity not allowed: {value}"),
            });
        }
        let shares = value.trunc().to_u32().ok_or_else(|| DomainError::InvalidValue {
            field: "quantity".to_string(),
            message: format!("Order quantity out of range: {value}"),
        })?;
        Self::new(shares)
    }

    /// Get the share count.
    #[must_use]
    pub const fn shares(&self) -> u32 {
        self.0
    }

    /// Share count as a signed integer, for holdings arithmetic.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for Decimal {
    fn from(value: Quantity) -> Self {
        Decimal::from(value.0)
    }
}
