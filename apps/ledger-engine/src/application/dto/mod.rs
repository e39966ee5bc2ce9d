//! Data Transfer Objects
//!
//! Wire shapes for the HTTP boundary. DTOs carry raw decimals and strings;
//! conversion into domain types happens in the use cases.

mod order_dto;
mod transfer_dto;

pub use order_dto::{ListOrdersResponseDto, OrderDto, SubmitOrderDto, SubmitOrderResponseDto};
pub use transfer_dto::{
    ListTransfersResponseDto, SubmitTransferDto, SubmitTransferResponseDto, TransferDto,
};
