//! Controls Bounded Context
//!
//! Administrative trading controls and the pure gate that enforces them.
//! The gate is checked before any pricing or balance work so a halted
//! market never reaches the ledger.

use serde::{Deserialize, Serialize};

use crate::domain::accounts::Account;
use crate::domain::settlement::SettlementError;
use crate::domain::shared::Symbol;

/// Market-wide control flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketControls {
    /// All trading refused.
    pub trading_halted: bool,
    /// Platform maintenance; treated identically to a trading halt.
    pub maintenance_mode: bool,
}

impl MarketControls {
    /// Whether the market accepts orders at all.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.trading_halted && !self.maintenance_mode
    }
}

/// Per-symbol control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStatus {
    /// Symbol trades normally.
    Active,
    /// Symbol is halted; orders in it are refused.
    Halted,
}

/// Pure control checks applied to every order before pricing.
///
/// Denials are ordered: market halt, then symbol halt, then account
/// suspension. The first failing check wins so responses are deterministic
/// when several controls are active at once.
pub struct TradingGate;

impl TradingGate {
    /// Run the control checks for an order in `symbol` by `account`.
    ///
    /// # Errors
    ///
    /// Returns the first applicable denial: [`SettlementError::MarketHalted`],
    /// [`SettlementError::SymbolHalted`], or
    /// [`SettlementError::AccountSuspended`].
    pub fn check(
        controls: MarketControls,
        symbol_status: SymbolStatus,
        symbol: &Symbol,
        account: &Account,
    ) -> Result<(), SettlementError> {
        if !controls.is_open() {
            return Err(SettlementError::MarketHalted);
        }
        if symbol_status == SymbolStatus::Halted {
            return Err(SettlementError::SymbolHalted {
                symbol: symbol.clone(),
            });
        }
        if account.is_suspended() {
            return Err(SettlementError::AccountSuspended {
                account_id: account.id.clone(),
            });
        }
        Ok(())
    }
}
