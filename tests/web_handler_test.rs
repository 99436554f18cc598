#![cfg(feature = "web")]
//! Web handler integration tests.
//!
//! Tests cover:
//! - Every screen renders with its expected content
//! - HTMX fragment vs full page responses
//! - Trade form prefill, quote preview and submission outcomes
//! - Error statuses for unknown stocks, bad parameters and failing data

mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use tradepro::adapters::seed_adapter::SeedDataAdapter;
use tradepro::adapters::web::{AppState, build_router};
use tradepro::domain::config_validation::SimulatorSettings;
use tradepro::ports::market_port::MarketDataPort;

use common::*;

fn seed_router() -> Router {
    router_with(Arc::new(SeedDataAdapter::new()))
}

fn router_with(data_port: Arc<dyn MarketDataPort + Send + Sync>) -> Router {
    build_router(AppState {
        data_port,
        settings: SimulatorSettings::default(),
    })
}

async fn get(router: Router, uri: &str, htmx: bool) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    send(router, builder.body(Body::empty()).unwrap()).await
}

async fn post_trade(router: Router, form: &str) -> (StatusCode, String) {
    post_trade_with(router, form, false).await
}

async fn post_trade_with(router: Router, form: &str, htmx: bool) -> (StatusCode, String) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/trade")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    send(router, builder.body(Body::from(form.to_string())).unwrap()).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ===========================================================================
// Layout and fragments
// ===========================================================================

#[tokio::test]
async fn landing_renders_full_page() {
    let (status, body) = get(seed_router(), "/", false).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Master Stock Trading"));
    assert!(body.contains("₹100,000.00"));
}

#[tokio::test]
async fn htmx_request_gets_fragment_only() {
    let (status, body) = get(seed_router(), "/dashboard", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("class=\"navbar\""));
    assert!(body.contains("id=\"content\""));
}

#[tokio::test]
async fn boosted_navigation_gets_full_page() {
    let request = Request::builder()
        .uri("/market")
        .header("HX-Request", "true")
        .header("HX-Boosted", "true")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(seed_router(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("class=\"navbar\""));
}

#[tokio::test]
async fn full_page_marks_active_nav_entry() {
    let (_, body) = get(seed_router(), "/portfolio", false).await;
    assert!(body.contains("<a href=\"/portfolio\" class=\"active\">"));
}

// ===========================================================================
// Screens
// ===========================================================================

#[tokio::test]
async fn dashboard_shows_profit_and_leaderboard() {
    let (_, body) = get(seed_router(), "/dashboard", true).await;
    assert!(body.contains("₹125,000.00"));
    assert!(body.contains("+₹25,000.00"));
    assert!(body.contains("+25.00%"));
    assert!(body.contains("₹50,000.00"));
    assert!(body.contains("Alex Chen"));
    assert!(body.contains("class=\"you\""));
}

#[tokio::test]
async fn market_search_filters_listing() {
    let (status, body) = get(seed_router(), "/market?q=tesla", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tesla Inc."));
    assert!(!body.contains("Alphabet Inc."));
    assert!(body.contains("(1 of 8)"));
}

#[tokio::test]
async fn market_without_query_lists_everything_with_movers() {
    let (_, body) = get(seed_router(), "/market", true).await;
    assert!(body.contains("(8 of 8)"));
    assert!(body.contains("+2.46%"));
    assert!(body.contains("-2.14%"));
}

#[tokio::test]
async fn stock_detail_shows_profile_and_position() {
    let (status, body) = get(seed_router(), "/market/aapl", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Apple Inc."));
    assert!(body.contains("28.5"));
    assert!(body.contains("You hold 15 shares."));
    assert!(body.contains("Apple Reports Record Q4 Earnings"));
}

#[tokio::test]
async fn stock_detail_unknown_symbol_is_404() {
    let (status, body) = get(seed_router(), "/market/ZZZ", false).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("ZZZ"));
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("class=\"navbar\""));
}

#[tokio::test]
async fn htmx_error_gets_fragment_only() {
    let (status, body) = get(seed_router(), "/market/ZZZ", true).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("id=\"error\""));
    assert!(body.contains("ZZZ"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("class=\"navbar\""));
}

#[tokio::test]
async fn portfolio_values_holdings() {
    let (_, body) = get(seed_router(), "/portfolio", true).await;
    assert!(body.contains("₹8,107.41"));
    assert!(body.contains("+₹221.01"));
    assert!(body.contains("INFY"));
    assert!(body.contains("id=\"transactions\""));
}

#[tokio::test]
async fn portfolio_skips_unlisted_holdings() {
    let port = MockMarketDataPort::new().with_holdings(vec![
        tradepro::domain::holding::Holding::new("ACME", 10, 90.0),
        tradepro::domain::holding::Holding::new("GONE", 5, 10.0),
    ]);
    let (status, body) = get(router_with(Arc::new(port)), "/portfolio", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ACME"));
    assert!(!body.contains("GONE"));
    assert!(body.contains("₹1,000.00"));
}

#[tokio::test]
async fn news_filters_by_category() {
    let (status, body) = get(seed_router(), "/news?category=crypto", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Bitcoin Hits New High"));
    assert!(!body.contains("Federal Reserve"));
    assert!(body.contains("All News (6)"));
    assert!(body.contains("Crypto (1)"));
}

#[tokio::test]
async fn news_search_matches_tags() {
    let (_, body) = get(seed_router(), "/news?q=fed", true).await;
    assert!(body.contains("Federal Reserve Hints"));
    assert!(!body.contains("Energy Stocks Rally"));
}

#[tokio::test]
async fn news_unknown_category_is_bad_request() {
    let (status, _) = get(seed_router(), "/news?category=sports", true).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tutorials_and_profile_render() {
    let (status, body) = get(seed_router(), "/tutorials", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Complete Beginner"));

    let (status, body) = get(seed_router(), "/profile", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("John Doe"));
    assert!(body.contains("68.5%"));
    assert!(body.contains("First Trade"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, body) = get(seed_router(), "/nowhere", false).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn failing_data_port_is_500() {
    let port = MockMarketDataPort::new().failing("listing unavailable");
    let (status, body) = get(router_with(Arc::new(port)), "/market", true).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("listing unavailable"));
}

// ===========================================================================
// Trade form
// ===========================================================================

#[tokio::test]
async fn trade_prefills_sell_tab_from_query() {
    let (status, body) = get(seed_router(), "/trade?type=sell&symbol=TSLA", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"type\" value=\"sell\""));
    assert!(body.contains("<option value=\"TSLA\" selected>"));
    assert!(body.contains("Available to sell: 8 shares"));
    assert!(body.contains("Sell Order"));
}

#[tokio::test]
async fn trade_shows_quote_when_priced() {
    let (_, body) = get(seed_router(), "/trade?type=buy&symbol=AAPL&quantity=10", true).await;
    assert!(body.contains("id=\"order-summary\""));
    assert!(body.contains("₹1,754.30"));
    assert!(body.contains("₹1,756.05"));
    assert!(body.contains("Total Cost"));
    assert!(body.contains("Brokerage (0.1%)"));
}

#[tokio::test]
async fn trade_without_quantity_has_no_quote() {
    let (_, body) = get(seed_router(), "/trade?symbol=AAPL", true).await;
    assert!(!body.contains("id=\"order-summary\""));
    assert!(body.contains("name=\"type\" value=\"buy\""));
}

#[tokio::test]
async fn trade_limit_order_prices_at_limit() {
    let (_, body) = get(
        seed_router(),
        "/trade?type=sell&symbol=TSLA&quantity=2&kind=limit&limit_price=250",
        true,
    )
    .await;
    assert!(body.contains("₹500.00"));
    assert!(body.contains("₹499.50"));
    assert!(body.contains("Total Proceeds"));
}

#[tokio::test]
async fn trade_rejects_unknown_side() {
    let (status, _) = get(seed_router(), "/trade?type=short", true).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_accepted_buy_clears_quantity() {
    let (status, body) = post_trade(seed_router(), "type=buy&symbol=AAPL&quantity=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Successfully bought 10 shares of AAPL."));
    assert!(body.contains("name=\"quantity\" value=\"\""));
    assert!(body.contains("<option value=\"AAPL\" selected>"));
}

#[tokio::test]
async fn submit_sell_beyond_holdings_is_rejected() {
    let (status, body) = post_trade(seed_router(), "type=sell&symbol=TSLA&quantity=20").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Insufficient Holdings"));
    assert!(body.contains("You only have 8 shares of TSLA."));
    assert!(body.contains("name=\"quantity\" value=\"20\""));
}

#[tokio::test]
async fn submit_buy_beyond_balance_is_rejected() {
    let (status, body) = post_trade(seed_router(), "type=buy&symbol=TCS&quantity=100").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Insufficient Balance"));
}

#[tokio::test]
async fn submit_without_symbol_or_quantity() {
    let (status, body) = post_trade(seed_router(), "type=buy&symbol=&quantity=5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Please select a stock to trade."));

    let (status, body) = post_trade(seed_router(), "type=buy&symbol=AAPL&quantity=").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Please enter a valid quantity."));
}

#[tokio::test]
async fn htmx_rejection_is_swappable() {
    let (status, body) =
        post_trade_with(seed_router(), "type=sell&symbol=TSLA&quantity=20", true).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"content\""));
    assert!(body.contains("You only have 8 shares of TSLA."));
    assert!(body.contains("name=\"quantity\" value=\"20\""));
    assert!(body.contains("<option value=\"TSLA\" selected>"));
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn submit_full_page_keeps_layout() {
    let (status, body) = post_trade(seed_router(), "type=sell&symbol=AAPL&quantity=5").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Successfully sold 5 shares of AAPL."));
}
