// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Ledger Engine - Order Execution & Account Ledger Core
//!
//! Deterministic settlement core for a paper-trading platform: it takes
//! buy/sell requests, validates them against administrative trading
//! controls, converts native-exchange value into the settlement currency
//! (INR), and atomically applies the result to a cash ledger with an
//! append-only order history.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `orders`: Immutable order records, side and exchange vocabulary
//!   - `accounts`: Account cash state, transfer records
//!   - `controls`: Halt/suspension gate
//!   - `conversion`: Settlement-currency conversion with single rounding
//!   - `holdings`: Net positions derived from order history
//!   - `settlement`: The rejection taxonomy
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `LedgerPort`, `ControlStorePort`
//!   - `use_cases`: `SubmitOrder`, `ListOrders`, `TransferFunds`
//!   - `dto`: Wire shapes for the API boundary
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: In-memory versioned ledger
//!   - `controls`: In-memory control store and symbol registry
//!
//! - **Server**: Axum REST API
//!
//! # Concurrency
//!
//! Commits are serialized per account by optimistic versioning: every
//! balance change carries the version it was computed against, the ledger
//! refuses stale commits, and the pipeline reruns against fresh state. Two
//! concurrent sells of the same holdings settle one order and reject the
//! other.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod server;
