//! Order DTOs for the HTTP boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::orders::{Exchange, Order, OrderSide};

/// Request body for submitting an order.
///
/// Quantity and price arrive as raw decimals; the pipeline validates them
/// into domain types before anything else happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderDto {
    /// Ticker symbol.
    pub symbol: String,
    /// Human-readable instrument name.
    pub display_name: String,
    /// Per-share price in the exchange's native currency.
    pub unit_price: Decimal,
    /// Share count; must be a positive whole number.
    pub quantity: Decimal,
    /// Exchange the quote came from.
    pub exchange: Exchange,
    /// Buy or sell.
    pub side: OrderSide,
}

/// A committed order as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    /// Order identifier.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Human-readable instrument name.
    pub display_name: String,
    /// Per-share price in the exchange's native currency.
    pub unit_price: Decimal,
    /// Share count.
    pub quantity: u32,
    /// Exchange the quote came from.
    pub exchange: Exchange,
    /// Buy or sell.
    pub side: OrderSide,
    /// Total settlement value in INR.
    pub settlement_value: Decimal,
    /// Commit time, RFC 3339.
    pub created_at: String,
}

impl OrderDto {
    /// Build the wire representation of a committed order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            symbol: order.symbol.to_string(),
            display_name: order.display_name.clone(),
            unit_price: order.unit_price.amount(),
            quantity: order.quantity.shares(),
            exchange: order.exchange,
            side: order.side,
            settlement_value: order.settlement_value.amount(),
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

/// Response for a committed order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderResponseDto {
    /// The committed order.
    pub order: OrderDto,
    /// Account balance after settlement.
    pub balance: Decimal,
}

/// Response for an order history listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrdersResponseDto {
    /// Committed orders, oldest first.
    pub orders: Vec<OrderDto>,
}
