//! Control Store Adapter
//!
//! In-memory trading controls and symbol registry. Controls are mutated by
//! operators through adapter methods and read by the pipeline through the
//! port; a flip lands on the very next order.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::ControlStorePort;
use crate::domain::controls::{MarketControls, SymbolStatus};
use crate::domain::shared::Symbol;

#[derive(Debug, Default)]
struct ControlsInner {
    market: MarketControls,
    symbols: HashMap<Symbol, SymbolStatus>,
}

/// In-memory implementation of `ControlStorePort`.
#[derive(Debug, Default)]
pub struct InMemoryControlStore {
    inner: RwLock<ControlsInner>,
}

impl InMemoryControlStore {
    /// Create an empty store with the market open and no symbols listed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ControlsInner::default()),
        }
    }

    /// Register a symbol as tradable.
    pub fn register_symbol(&self, symbol: Symbol) {
        let mut inner = self.inner.write().unwrap();
        inner.symbols.insert(symbol, SymbolStatus::Active);
    }

    /// Set or clear the market-wide trading halt.
    pub fn set_trading_halted(&self, halted: bool) {
        let mut inner = self.inner.write().unwrap();
        inner.market.trading_halted = halted;
    }

    /// Enter or leave maintenance mode.
    pub fn set_maintenance_mode(&self, enabled: bool) {
        let mut inner = self.inner.write().unwrap();
        inner.market.maintenance_mode = enabled;
    }

    /// Set a registered symbol's halt state. Unregistered symbols are
    /// ignored.
    pub fn set_symbol_status(&self, symbol: &Symbol, status: SymbolStatus) {
        let mut inner = self.inner.write().unwrap();
        if let Some(entry) = inner.symbols.get_mut(symbol) {
            *entry = status;
        }
    }
}

#[async_trait]
impl ControlStorePort for InMemoryControlStore {
    async fn market_controls(&self) -> MarketControls {
        self.inner.read().unwrap().market
    }

    async fn symbol_status(&self, symbol: &Symbol) -> Option<SymbolStatus> {
        self.inner.read().unwrap().symbols.get(symbol).copied()
    }
}
