//! The settlement rejection taxonomy.

use std::fmt;

use crate::domain::shared::{AccountId, Money, Symbol};

/// Why an order or transfer was refused.
///
/// Rejections are terminal and leave no trace in the ledger: no order row,
/// no balance change, no holdings change. Each variant maps to a stable
/// wire code via [`SettlementError::kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementError {
    /// Quantity was zero, negative, fractional, or out of range.
    InvalidQuantity {
        /// What was wrong with it.
        message: String,
    },

    /// Unit price was zero, negative, or out of range.
    InvalidPrice {
        /// What was wrong with it.
        message: String,
    },

    /// Transfer amount was zero, negative, or out of range.
    InvalidAmount {
        /// What was wrong with it.
        message: String,
    },

    /// The whole market is halted or in maintenance.
    MarketHalted,

    /// Trading in this one symbol is halted.
    SymbolHalted {
        /// The halted symbol.
        symbol: Symbol,
    },

    /// The submitting account is administratively suspended.
    AccountSuspended {
        /// The suspended account.
        account_id: AccountId,
    },

    /// A buy or withdrawal would overdraw the account.
    InsufficientFunds {
        /// Cash the operation needs.
        needed: Money,
        /// Cash actually available.
        available: Money,
    },

    /// A sell exceeds the account's net position in the symbol.
    InsufficientHoldings {
        /// Shares the sell asked for.
        requested: i64,
        /// Shares actually held.
        held: i64,
    },

    /// No account exists for the submitted identity.
    AccountNotFound {
        /// The unknown account.
        account_id: AccountId,
    },

    /// The symbol is not registered with the control store.
    SymbolNotFound {
        /// The unknown symbol.
        symbol: Symbol,
    },

    /// Commit retries exhausted under concurrent writes to the account.
    ConcurrencyConflict,
}

impl SettlementError {
    /// Stable wire code for this rejection.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidQuantity { .. } => "INVALID_QUANTITY",
            Self::InvalidPrice { .. } => "INVALID_PRICE",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::MarketHalted => "MARKET_HALTED",
            Self::SymbolHalted { .. } => "SYMBOL_HALTED",
            Self::AccountSuspended { .. } => "ACCOUNT_SUSPENDED",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::InsufficientHoldings { .. } => "INSUFFICIENT_HOLDINGS",
            Self::AccountNotFound { .. } => "ACCOUNT_NOT_FOUND",
            Self::SymbolNotFound { .. } => "SYMBOL_NOT_FOUND",
            Self::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
        }
    }
}

impl fmt::Display for SettlementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuantity { message } => {
                write!(f, "Invalid quantity: {message}")
            }
            Self::InvalidPrice { message } => {
                write!(f, "Invalid price: {message}")
            }
            Self::InvalidAmount { message } => {
                write!(f, "Invalid transfer amount: {message}")
            }
            Self::MarketHalted => {
                write!(f, "Trading is halted market-wide")
            }
            Self::SymbolHalted { symbol } => {
                write!(f, "Trading in {symbol} is halted")
            }
            Self::AccountSuspended { account_id } => {
                write!(f, "Account {account_id} is suspended")
            }
            Self::InsufficientFunds { needed, available } => {
                write!(f, "Insufficient funds: need {needed}, have {available}")
            }
            Self::InsufficientHoldings { requested, held } => {
                write!(
                    f,
                    "Insufficient holdings: requested {requested} shares, hold {held}"
                )
            }
            Self::AccountNotFound { account_id } => {
                write!(f, "Account not found: {account_id}")
            }
            Self::SymbolNotFound { symbol } => {
                write!(f, "Symbol not found: {symbol}")
            }
            Self::ConcurrencyConflict => {
                write!(f, "Concurrent updates to the account; retries exhausted")
            }
        }
    }
}

impl std::error::Error for SettlementError {}
