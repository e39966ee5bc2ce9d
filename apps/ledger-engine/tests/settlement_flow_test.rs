//! Settlement Flow Integration Tests
//!
//! End-to-end tests that drive the HTTP router through realistic account
//! lifecycles: funding, buying, selling, withdrawing, and racing orders
//! against each other.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use ledger_engine::application::dto::{
    ListOrdersResponseDto, SubmitOrderResponseDto, SubmitTransferResponseDto,
};
use ledger_engine::application::use_cases::{
    ListOrdersUseCase, SubmitOrderUseCase, TransferFundsUseCase,
};
use ledger_engine::domain::conversion::{CurrencyConverter, FixedRateProvider};
use ledger_engine::domain::shared::{AccountId, Money, Symbol};
use ledger_engine::infrastructure::controls::InMemoryControlStore;
use ledger_engine::infrastructure::persistence::InMemoryLedger;
use ledger_engine::server::{AppState, ErrorResponse, create_router};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tower::ServiceExt;

const TRADER: &str = "trader@example.com";

fn make_test_app(starting_balance: Decimal) -> Router {
    let ledger = Arc::new(InMemoryLedger::new());
    ledger.open_account(AccountId::new(TRADER), Money::new(starting_balance));

    let controls = Arc::new(InMemoryControlStore::new());
    controls.register_symbol(Symbol::new("RELIANCE"));
    controls.register_symbol(Symbol::new("AAPL"));

    let submit_order = Arc::new(SubmitOrderUseCase::new(
        Arc::clone(&ledger),
        Arc::clone(&controls),
        CurrencyConverter::new(FixedRateProvider::new(dec!(83.10))),
    ));
    let list_orders = Arc::new(ListOrdersUseCase::new(Arc::clone(&ledger)));
    let transfers = Arc::new(TransferFundsUseCase::new(Arc::clone(&ledger)));

    create_router(AppState {
        submit_order,
        list_orders,
        transfers,
        version: "test".to_string(),
    })
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-account-id", TRADER)
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-account-id", TRADER)
        .body(Body::empty())
        .unwrap()
}

fn order_json(symbol: &str, exchange: &str, price: &str, qty: &str, side: &str) -> serde_json::Value {
    serde_json::json!({
        "symbol": symbol,
        "display_name": symbol,
        "unit_price": price,
        "quantity": qty,
        "exchange": exchange,
        "side": side,
    })
}

async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn full_account_lifecycle() {
    let app = make_test_app(dec!(0));

    // Fund the account.
    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/transfers",
            &serde_json::json!({"kind": "deposit", "amount": "100000"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: SubmitTransferResponseDto = json_body(response).await;
    assert_eq!(body.balance, dec!(100000));

    // Buy 4 shares of RELIANCE at 2500.
    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/orders",
            &order_json("RELIANCE", "NSE", "2500.00", "4", "buy"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: SubmitOrderResponseDto = json_body(response).await;
    assert_eq!(body.balance, dec!(90000.00));

    // Sell them back at the same price; the balance returns exactly.
    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/orders",
            &order_json("RELIANCE", "NSE", "2500.00", "4", "sell"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: SubmitOrderResponseDto = json_body(response).await;
    assert_eq!(body.balance, dec!(100000.00));

    // Both orders are on the books.
    let response = app.clone().oneshot(get("/v1/orders")).await.unwrap();
    let body: ListOrdersResponseDto = json_body(response).await;
    assert_eq!(body.orders.len(), 2);

    // Withdraw everything.
    let response = app
        .oneshot(post_json(
            "/v1/transfers",
            &serde_json::json!({"kind": "withdraw", "amount": "100000"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: SubmitTransferResponseDto = json_body(response).await;
    assert_eq!(body.balance, dec!(0));
}

#[tokio::test]
async fn us_quotes_settle_in_rupees() {
    let app = make_test_app(dec!(100000));

    let response = app
        .oneshot(post_json(
            "/v1/orders",
            &order_json("AAPL", "NASDAQ", "150.25", "2", "buy"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: SubmitOrderResponseDto = json_body(response).await;

    // 150.25 USD * 2 * 83.10 = 24971.55 INR
    assert_eq!(body.order.settlement_value, dec!(24971.55));
    assert_eq!(body.balance, dec!(75028.45));
}

#[tokio::test]
async fn concurrent_sells_cannot_oversell_holdings() {
    let app = make_test_app(dec!(100000));

    // Hold exactly 5 shares.
    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/orders",
            &order_json("RELIANCE", "NSE", "100", "5", "buy"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Race two full-position sells.
    let sell = order_json("RELIANCE", "NSE", "100", "5", "sell");
    let (a, b) = tokio::join!(
        app.clone().oneshot(post_json("/v1/orders", &sell)),
        app.clone().oneshot(post_json("/v1/orders", &sell)),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    // Exactly one sell settles. The other reruns against the committed
    // state, folds the position to zero, and is refused as overselling.
    let (winner, loser) = if a.status() == StatusCode::CREATED {
        (a, b)
    } else {
        (b, a)
    };
    assert_eq!(winner.status(), StatusCode::CREATED);
    assert_eq!(loser.status(), StatusCode::BAD_REQUEST);
    let rejection: ErrorResponse = json_body(loser).await;
    assert_eq!(rejection.error, "INSUFFICIENT_HOLDINGS");

    // One buy and one sell on the books; the position is flat.
    let response = app.oneshot(get("/v1/orders")).await.unwrap();
    let body: ListOrdersResponseDto = json_body(response).await;
    assert_eq!(body.orders.len(), 2);
}

#[tokio::test]
async fn rejected_orders_leave_no_trace() {
    let app = make_test_app(dec!(100));

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/orders",
            &order_json("RELIANCE", "NSE", "2500.00", "1", "buy"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/v1/orders")).await.unwrap();
    let body: ListOrdersResponseDto = json_body(response).await;
    assert!(body.orders.is_empty());
}
