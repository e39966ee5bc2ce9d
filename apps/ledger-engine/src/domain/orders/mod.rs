//! Orders Bounded Context
//!
//! Immutable order records and the trade vocabulary (side, exchange).

mod exchange;
mod order;
mod side;

pub use exchange::Exchange;
pub use order::{Order, OrderDraft};
pub use side::OrderSide;
