//! Seed data configuration.
//!
//! The in-memory ledger starts empty; seed accounts and symbols give a
//! deployment something to trade against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seed data applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedConfig {
    /// Accounts opened at startup.
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
    /// Symbols registered as tradable at startup.
    #[serde(default)]
    pub symbols: Vec<String>,
}

/// An account opened at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedAccount {
    /// Account identifier.
    pub id: String,
    /// Starting balance in the settlement currency.
    pub balance: Decimal,
}
