//! Server Layer (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

mod http;

pub use http::{ApiError, AppState, ErrorResponse, create_router};
