//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Records**: Immutable order and transfer facts
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic (gate, conversion, holdings)
//!
//! # Bounded Contexts
//!
//! - [`accounts`]: Account state and cash transfer records
//! - [`orders`]: Immutable order records and trade vocabulary
//! - [`controls`]: Administrative halt/suspension gate
//! - [`conversion`]: Native-exchange to settlement-currency conversion
//! - [`holdings`]: Net position derivation from order history
//! - [`settlement`]: The settlement rejection taxonomy

pub mod accounts;
pub mod controls;
pub mod conversion;
pub mod holdings;
pub mod orders;
pub mod settlement;
pub mod shared;
