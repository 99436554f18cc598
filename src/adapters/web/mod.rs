//! Web server adapter.
//!
//! Axum router with an HTMX frontend. Every screen renders its `#content`
//! fragment; full page loads get it wrapped in the base layout.

mod error;
mod handlers;
mod templates;

pub use error::WebError;
pub use handlers::*;
pub use templates::*;

use askama::Template;
use axum::{
    Router,
    http::HeaderMap,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::domain::config_validation::SimulatorSettings;
use crate::ports::market_port::MarketDataPort;

pub struct AppState {
    pub data_port: Arc<dyn MarketDataPort + Send + Sync>,
    pub settings: SimulatorSettings,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/dashboard", get(handlers::dashboard))
        .route("/market", get(handlers::market))
        .route("/market/{symbol}", get(handlers::stock_detail))
        .route("/portfolio", get(handlers::portfolio))
        .route(
            "/trade",
            get(handlers::trade_form).post(handlers::submit_trade),
        )
        .route("/tutorials", get(handlers::tutorials))
        .route("/news", get(handlers::news))
        .route("/profile", get(handlers::profile))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(error::wrap_errors))
        .with_state(Arc::new(state))
}

// Boosted navigation swaps the whole body, so it needs the full layout.
fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers.get("HX-Request").is_some() && headers.get("HX-Boosted").is_none()
}

/// Renders `content` as a bare fragment for HTMX, or inside the layout.
fn render_page(
    headers: &HeaderMap,
    title: &str,
    active: &str,
    content: &impl Template,
) -> Result<Response, WebError> {
    let fragment = content.render()?;
    if is_htmx_request(headers) {
        return Ok(Html(fragment).into_response());
    }
    let page = BasePage {
        title,
        active,
        content: &fragment,
    };
    Ok(Html(page.render()?).into_response())
}
