//! Application Ports
//!
//! Driven ports the use cases depend on. Adapters live in the
//! infrastructure layer.

mod control_store_port;
mod ledger_port;

pub use control_store_port::ControlStorePort;
pub use ledger_port::{LedgerError, LedgerPort};
