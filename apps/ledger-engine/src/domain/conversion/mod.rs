//! Conversion Bounded Context
//!
//! Turns a native-currency quote into a settlement-currency total. NSE and
//! BSE quotes are already in INR and pass through; NASDAQ and NYSE quotes
//! are in USD and are multiplied by the configured rate. Rounding happens
//! exactly once, on the final total.

use rust_decimal::Decimal;

use crate::domain::orders::Exchange;
use crate::domain::shared::{Money, Quantity};

/// Source of USD to INR conversion rates.
///
/// The engine treats the rate as an injected dependency so tests can pin it
/// and a live deployment can swap in a feed without touching the pipeline.
pub trait RateProvider: Send + Sync {
    /// Multiplier from the exchange's native currency to INR.
    ///
    /// Must return exactly `1` for exchanges that settle natively.
    fn rate(&self, exchange: Exchange) -> Decimal;
}

/// A fixed-rate provider configured at startup.
#[derive(Debug, Clone)]
pub struct FixedRateProvider {
    usd_inr: Decimal,
}

impl FixedRateProvider {
    /// Create a provider with the given USD to INR rate.
    #[must_use]
    pub const fn new(usd_inr: Decimal) -> Self {
        Self { usd_inr }
    }
}

impl RateProvider for FixedRateProvider {
    fn rate(&self, exchange: Exchange) -> Decimal {
        if exchange.settles_natively() {
            Decimal::ONE
        } else {
            self.usd_inr
        }
    }
}

/// Computes settlement totals from native quotes.
pub struct CurrencyConverter<R> {
    rates: R,
}

impl<R: RateProvider> CurrencyConverter<R> {
    /// Create a converter over the given rate source.
    pub const fn new(rates: R) -> Self {
        Self { rates }
    }

    /// Settlement total for `quantity` shares at `unit_price` on `exchange`.
    ///
    /// The product `unit_price * quantity * rate` is computed at full
    /// precision and rounded half-even to 2 decimals in one step. Rounding
    /// only the final total keeps a buy and an equal sell at the same quote
    /// perfectly symmetric on the balance.
    #[must_use]
    pub fn settlement_value(
        &self,
        unit_price: Money,
        quantity: Quantity,
        exchange: Exchange,
    ) -> Money {
        let total = unit_price * quantity.shares() * self.rates.rate(exchange);
        total.round()
    }
}
