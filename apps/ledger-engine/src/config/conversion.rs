//! Currency conversion configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Conversion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// USD to INR multiplier applied to US exchange quotes.
    #[serde(default = "default_usd_inr")]
    pub usd_inr: Decimal,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            usd_inr: default_usd_inr(),
        }
    }
}

fn default_usd_inr() -> Decimal {
    Decimal::new(8310, 2) // 83.10
}
