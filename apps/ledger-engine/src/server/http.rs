//! HTTP Controller
//!
//! REST endpoints for order execution, order history, and cash transfers.
//! The caller identifies its account with the `x-account-id` header; there
//! is no session layer in front of this service.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::application::dto::{SubmitOrderDto, SubmitTransferDto};
use crate::application::ports::{ControlStorePort, LedgerPort};
use crate::application::use_cases::{ListOrdersUseCase, SubmitOrderUseCase, TransferFundsUseCase};
use crate::domain::conversion::RateProvider;
use crate::domain::settlement::SettlementError;
use crate::domain::shared::AccountId;

/// Application state shared across handlers.
pub struct AppState<L, C, R>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    /// Use case for executing orders.
    pub submit_order: Arc<SubmitOrderUseCase<L, C, R>>,
    /// Use case for reading order history.
    pub list_orders: Arc<ListOrdersUseCase<L>>,
    /// Use case for cash transfers.
    pub transfers: Arc<TransferFundsUseCase<L>>,
    /// Application version.
    pub version: String,
}

impl<L, C, R> Clone for AppState<L, C, R>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    fn clone(&self) -> Self {
        Self {
            submit_order: Arc::clone(&self.submit_order),
            list_orders: Arc::clone(&self.list_orders),
            transfers: Arc::clone(&self.transfers),
            version: self.version.clone(),
        }
    }
}

/// Error payload returned for every rejected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable rejection code.
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
}

/// An API error carrying the HTTP status and the wire code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: String,
    message: String,
}

impl ApiError {
    /// Missing or empty `x-account-id` header.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            kind: "UNAUTHENTICATED".to_string(),
            message: "The x-account-id header is required".to_string(),
        }
    }
}

impl From<SettlementError> for ApiError {
    fn from(err: SettlementError) -> Self {
        let status = match &err {
            SettlementError::InvalidQuantity { .. }
            | SettlementError::InvalidPrice { .. }
            | SettlementError::InvalidAmount { .. }
            | SettlementError::InsufficientFunds { .. }
            | SettlementError::InsufficientHoldings { .. } => StatusCode::BAD_REQUEST,
            SettlementError::MarketHalted
            | SettlementError::SymbolHalted { .. }
            | SettlementError::AccountSuspended { .. } => StatusCode::FORBIDDEN,
            SettlementError::AccountNotFound { .. } | SettlementError::SymbolNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            SettlementError::ConcurrencyConflict => StatusCode::CONFLICT,
        };
        Self {
            status,
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.kind,
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// Health check payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" when the process is serving.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Create the HTTP router with all endpoints.
pub fn create_router<L, C, R>(state: AppState<L, C, R>) -> Router
where
    L: LedgerPort + 'static,
    C: ControlStorePort + 'static,
    R: RateProvider + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/orders", get(list_orders).post(submit_order))
        .route("/v1/transfers", get(list_transfers).post(submit_transfer))
        .with_state(state)
}

fn account_from_headers(headers: &HeaderMap) -> Result<AccountId, ApiError> {
    headers
        .get("x-account-id")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(AccountId::new)
        .ok_or_else(ApiError::unauthenticated)
}

/// Health check endpoint.
async fn health_check<L, C, R>(State(state): State<AppState<L, C, R>>) -> impl IntoResponse
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Execute an order.
async fn submit_order<L, C, R>(
    State(state): State<AppState<L, C, R>>,
    headers: HeaderMap,
    Json(request): Json<SubmitOrderDto>,
) -> Result<Response, ApiError>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    let account_id = account_from_headers(&headers)?;
    let response = state.submit_order.execute(account_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// List the caller's committed orders.
async fn list_orders<L, C, R>(
    State(state): State<AppState<L, C, R>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    let account_id = account_from_headers(&headers)?;
    let response = state.list_orders.execute(account_id).await?;
    Ok(Json(response).into_response())
}

/// Execute a cash transfer.
async fn submit_transfer<L, C, R>(
    State(state): State<AppState<L, C, R>>,
    headers: HeaderMap,
    Json(request): Json<SubmitTransferDto>,
) -> Result<Response, ApiError>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    let account_id = account_from_headers(&headers)?;
    let response = state.transfers.execute(account_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// List the caller's committed transfers.
async fn list_transfers<L, C, R>(
    State(state): State<AppState<L, C, R>>,
    headers: HeaderMap,
) -> Result<Response, ApiError>
where
    L: LedgerPort,
    C: ControlStorePort,
    R: RateProvider,
{
    let account_id = account_from_headers(&headers)?;
    let response = state.transfers.history(account_id).await?;
    Ok(Json(response).into_response())
}
