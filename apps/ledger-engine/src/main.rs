//! Ledger Engine Binary
//!
//! Starts the order execution and account ledger service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ledger-engine
//! ```
//!
//! # Environment Variables
//!
//! - `LEDGER_CONFIG`: Path to the YAML config file (default: config.yaml)
//! - `RUST_LOG`: Log filter, overrides the configured level

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use ledger_engine::application::use_cases::{
    ListOrdersUseCase, SubmitOrderUseCase, TransferFundsUseCase,
};
use ledger_engine::config::{Config, load_config};
use ledger_engine::domain::conversion::{CurrencyConverter, FixedRateProvider};
use ledger_engine::domain::shared::{AccountId, Money, Symbol};
use ledger_engine::infrastructure::controls::InMemoryControlStore;
use ledger_engine::infrastructure::persistence::InMemoryLedger;
use ledger_engine::observability::init_logging;
use ledger_engine::server::{AppState, create_router};

/// Concrete type alias for the submit order use case.
type ConcreteSubmitOrderUseCase =
    SubmitOrderUseCase<InMemoryLedger, InMemoryControlStore, FixedRateProvider>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("LEDGER_CONFIG").ok();
    let config = load_config(config_path.as_deref()).context("loading configuration")?;

    init_logging(&config.observability.logging);
    tracing::info!(
        http_port = config.server.http_port,
        usd_inr = %config.conversion.usd_inr,
        seed_accounts = config.seed.accounts.len(),
        seed_symbols = config.seed.symbols.len(),
        "Starting ledger engine"
    );

    let ledger = Arc::new(InMemoryLedger::new());
    let controls = Arc::new(InMemoryControlStore::new());
    apply_seed(&config, &ledger, &controls);

    let submit_order: Arc<ConcreteSubmitOrderUseCase> = Arc::new(SubmitOrderUseCase::new(
        Arc::clone(&ledger),
        Arc::clone(&controls),
        CurrencyConverter::new(FixedRateProvider::new(config.conversion.usd_inr)),
    ));
    let list_orders = Arc::new(ListOrdersUseCase::new(Arc::clone(&ledger)));
    let transfers = Arc::new(TransferFundsUseCase::new(Arc::clone(&ledger)));

    let state = AppState {
        submit_order,
        list_orders,
        transfers,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.http_port)
        .parse()
        .context("parsing server bind address")?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /v1/orders");
    tracing::info!("  GET  /v1/orders");
    tracing::info!("  POST /v1/transfers");
    tracing::info!("  GET  /v1/transfers");

    let listener = TcpListener::bind(addr)
        .await
        .context("binding HTTP listener")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("Ledger engine stopped");
    Ok(())
}

/// Open seed accounts and register seed symbols.
fn apply_seed(config: &Config, ledger: &InMemoryLedger, controls: &InMemoryControlStore) {
    for account in &config.seed.accounts {
        ledger.open_account(AccountId::new(&account.id), Money::new(account.balance));
        tracing::info!(account_id = %account.id, balance = %account.balance, "Seed account opened");
    }
    for symbol in &config.seed.symbols {
        controls.register_symbol(Symbol::new(symbol));
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed; a process that cannot
/// respond to termination signals should fail at startup instead.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
