//! Application Use Cases
//!
//! Each use case orchestrates domain services over the driven ports.

mod list_orders;
mod submit_order;
mod transfer_funds;

pub use list_orders::ListOrdersUseCase;
pub use submit_order::SubmitOrderUseCase;
pub use transfer_funds::TransferFundsUseCase;
