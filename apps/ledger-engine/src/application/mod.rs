//! Application Layer
//!
//! Use cases, ports, and DTOs. This layer depends only on the domain; the
//! infrastructure layer implements the ports.

pub mod dto;
pub mod ports;
pub mod use_cases;
