//! Holdings Bounded Context
//!
//! Holdings are not stored. An account's position in a symbol is derived on
//! demand by folding signed quantities over its committed order history:
//! buys add, sells subtract. The fold is O(n) in the account's order count,
//! which is the accepted cost of keeping the ledger append-only.

use std::collections::HashMap;

use crate::domain::orders::Order;
use crate::domain::shared::Symbol;

/// Derives net positions from committed orders.
pub struct HoldingsCalculator;

impl HoldingsCalculator {
    /// Net shares held in `symbol` across the given orders.
    ///
    /// Orders in other symbols are ignored. The result can be negative only
    /// if the history itself is inconsistent; the execution pipeline never
    /// commits a sell past the derived position.
    #[must_use]
    pub fn position(orders: &[Order], symbol: &Symbol) -> i64 {
        orders
            .iter()
            .filter(|order| &order.symbol == symbol)
            .map(Order::signed_shares)
            .sum()
    }

    /// Net shares held per symbol across the given orders.
    ///
    /// Symbols whose position has returned to zero are omitted.
    #[must_use]
    pub fn positions(orders: &[Order]) -> HashMap<Symbol, i64> {
        let mut held: HashMap<Symbol, i64> = HashMap::new();
        for order in orders {
            *held.entry(order.symbol.clone()).or_insert(0) += order.signed_shares();
        }
        held.retain(|_, shares| *shares != 0);
        held
    }
}
