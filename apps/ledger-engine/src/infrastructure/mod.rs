//! Infrastructure Layer
//!
//! Adapters implementing the application ports.

pub mod controls;
pub mod persistence;
