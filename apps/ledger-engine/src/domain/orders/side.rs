//! Order side (direction) value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way an order moves cash and shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy: shares in, cash out.
    Buy,
    /// Sell: shares out, cash in.
    Sell,
}

impl OrderSide {
    /// Sign applied to the quantity when deriving holdings.
    #[must_use]
    pub const fn holdings_sign(&self) -> i64 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}
