//! Settlement Bounded Context
//!
//! The rejection taxonomy produced by the execution pipeline. Every way an
//! order or transfer can fail to commit is a named variant here, so the HTTP
//! layer can map rejections to stable wire codes.

mod errors;

pub use errors::SettlementError;
