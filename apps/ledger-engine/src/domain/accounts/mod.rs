//! Accounts Bounded Context
//!
//! Account cash state and append-only transfer records.

mod account;
mod transfer;

pub use account::{Account, AccountStatus};
pub use transfer::{CashTransfer, TransferKind};
