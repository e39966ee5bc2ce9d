//! Control Store Port (Driven Port)
//!
//! Interface to administrative trading controls. The store doubles as the
//! symbol registry: a symbol it does not know is not tradable.

use async_trait::async_trait;

use crate::domain::controls::{MarketControls, SymbolStatus};
use crate::domain::shared::Symbol;

/// Driven port for market and symbol controls.
#[async_trait]
pub trait ControlStorePort: Send + Sync {
    /// Current market-wide control flags.
    async fn market_controls(&self) -> MarketControls;

    /// Control state for a symbol, or `None` if the symbol is unregistered.
    async fn symbol_status(&self, symbol: &Symbol) -> Option<SymbolStatus>;
}
