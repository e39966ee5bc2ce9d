//! Cash transfer DTOs for the HTTP boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::accounts::{CashTransfer, TransferKind};

/// Request body for moving cash in or out of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTransferDto {
    /// Deposit or withdrawal.
    pub kind: TransferKind,
    /// Positive amount in the settlement currency.
    pub amount: Decimal,
}

/// A committed transfer as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferDto {
    /// Transfer identifier.
    pub id: String,
    /// Deposit or withdrawal.
    pub kind: TransferKind,
    /// Amount moved.
    pub amount: Decimal,
    /// Commit time, RFC 3339.
    pub created_at: String,
}

impl TransferDto {
    /// Build the wire representation of a committed transfer.
    #[must_use]
    pub fn from_transfer(transfer: &CashTransfer) -> Self {
        Self {
            id: transfer.id.to_string(),
            kind: transfer.kind,
            amount: transfer.amount.amount(),
            created_at: transfer.created_at.to_rfc3339(),
        }
    }
}

/// Response for a committed transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTransferResponseDto {
    /// The committed transfer.
    pub transfer: TransferDto,
    /// Account balance after the transfer.
    pub balance: Decimal,
}

/// Response for a transfer history listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTransfersResponseDto {
    /// Committed transfers, oldest first.
    pub transfers: Vec<TransferDto>,
}
