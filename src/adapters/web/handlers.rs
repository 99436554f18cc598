//! HTTP request handlers for web adapter.

use axum::{
    Form,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use chrono::Utc;
use log::{debug, info};
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::article::{self, NewsCategory};
use crate::domain::content::tutorial_stats;
use crate::domain::format;
use crate::domain::holding::held_quantity;
use crate::domain::list_filter;
use crate::domain::order::{Account, OrderCalculator, OrderKind, OrderSide, OrderTicket};
use crate::domain::portfolio::{leaderboard, value_portfolio, AccountOverview};
use crate::domain::ranking::{top_n, Direction, MOVERS_SHOWN};

use super::templates::{
    ArticleRow, CategoryTab, DashboardTemplate, LandingTemplate, MarketTemplate, MoverRow,
    NewsTemplate, Notice, PortfolioTemplate, ProfileTemplate, StockDetailTemplate, StockRow,
    TradeTemplate, TutorialsTemplate,
};
use super::{is_htmx_request, render_page, AppState, WebError};

const DASHBOARD_STOCKS: usize = 4;
const DASHBOARD_TRADES: usize = 3;

pub async fn landing(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let settings = &state.settings;
    let template = LandingTemplate {
        starting_balance: format::money(&settings.currency, settings.initial_balance),
        instrument_count: state.data_port.instruments()?.len(),
        tutorial_count: state.data_port.tutorials()?.len(),
    };
    render_page(&headers, "Home", "", &template)
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let settings = &state.settings;
    let instruments = state.data_port.instruments()?;
    let holdings = state.data_port.holdings()?;
    let transactions = state.data_port.transactions()?;
    let rivals = state.data_port.rivals()?;

    let overview = AccountOverview::new(settings.portfolio_value, settings.initial_balance);
    let board = leaderboard(&rivals, &overview);
    let top_stocks: Vec<_> = instruments.iter().take(DASHBOARD_STOCKS).collect();
    let recent = &transactions[..transactions.len().min(DASHBOARD_TRADES)];

    let template = DashboardTemplate::new(
        &overview,
        settings.available_balance,
        holdings.len(),
        &top_stocks,
        recent,
        &board,
        &settings.currency,
    );
    render_page(&headers, "Dashboard", "dashboard", &template)
}

#[derive(Debug, Default, Deserialize)]
pub struct MarketQuery {
    pub q: Option<String>,
}

pub async fn market(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<MarketQuery>,
) -> Result<Response, WebError> {
    let currency = &state.settings.currency;
    let instruments = state.data_port.instruments()?;
    let search = query.q.unwrap_or_default();

    let template = MarketTemplate {
        gainers: top_n(&instruments, MOVERS_SHOWN, Direction::Gainers)
            .into_iter()
            .map(MoverRow::new)
            .collect(),
        losers: top_n(&instruments, MOVERS_SHOWN, Direction::Losers)
            .into_iter()
            .map(MoverRow::new)
            .collect(),
        stocks: list_filter::filter(&instruments, &search)
            .into_iter()
            .map(|i| StockRow::new(i, currency))
            .collect(),
        listed: instruments.len(),
        search,
    };
    render_page(&headers, "Market", "market", &template)
}

pub async fn stock_detail(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(symbol): Path<String>,
) -> Result<Response, WebError> {
    let instrument = state.data_port.instrument(&symbol)?;
    let holdings = state.data_port.holdings()?;
    let articles = state.data_port.articles()?;
    let related = article::search(&articles, &instrument.symbol, None);

    let template = StockDetailTemplate::new(
        &instrument,
        held_quantity(&holdings, &instrument.symbol),
        &related,
        Utc::now(),
        &state.settings.currency,
    );
    render_page(&headers, &instrument.symbol, "market", &template)
}

pub async fn portfolio(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let instruments = state.data_port.instruments()?;
    let holdings = state.data_port.holdings()?;
    let transactions = state.data_port.transactions()?;

    let summary = value_portfolio(&holdings, &instruments);
    let template = PortfolioTemplate::new(&summary, &transactions, &state.settings.currency);
    render_page(&headers, "Portfolio", "portfolio", &template)
}

/// Trade form fields. `type` is the side, as in `/trade?type=sell&symbol=TSLA`.
#[derive(Debug, Default, Deserialize)]
pub struct TradeParams {
    #[serde(rename = "type")]
    pub side: Option<String>,
    pub symbol: Option<String>,
    pub quantity: Option<String>,
    pub kind: Option<String>,
    pub limit_price: Option<String>,
}

impl TradeParams {
    pub fn to_ticket(&self) -> Result<OrderTicket, WebError> {
        let side = match self.side.as_deref().map(str::trim) {
            None | Some("") => OrderSide::default(),
            Some(raw) => raw
                .parse::<OrderSide>()
                .map_err(|e| WebError::bad_request(format!("Invalid order side: {e}")))?,
        };
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") => OrderKind::default(),
            Some(raw) => raw
                .parse::<OrderKind>()
                .map_err(|e| WebError::bad_request(format!("Invalid order type: {e}")))?,
        };

        let mut ticket = OrderTicket::new(side, self.symbol.as_deref())
            .with_quantity(self.quantity.clone().unwrap_or_default());
        ticket.kind = kind;
        ticket.limit_price = self.limit_price.clone().unwrap_or_default();
        Ok(ticket)
    }
}

fn trade_page(
    state: &AppState,
    ticket: &OrderTicket,
    notice: Option<Notice>,
) -> Result<TradeTemplate, WebError> {
    let settings = &state.settings;
    let instruments = state.data_port.instruments()?;
    let holdings = state.data_port.holdings()?;
    let calculator = OrderCalculator::new(settings.brokerage_rate);
    let quote = calculator.preview(ticket, &instruments);

    Ok(TradeTemplate::new(
        ticket,
        &instruments,
        &holdings,
        quote.as_ref(),
        notice,
        settings.available_balance,
        calculator.brokerage_rate(),
        &settings.currency,
    ))
}

pub async fn trade_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<TradeParams>,
) -> Result<Response, WebError> {
    let ticket = params.to_ticket()?;
    let template = trade_page(&state, &ticket, None)?;
    render_page(&headers, "Trade", "trade", &template)
}

pub async fn submit_trade(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(params): Form<TradeParams>,
) -> Result<Response, WebError> {
    let ticket = params.to_ticket()?;
    let instruments = state.data_port.instruments()?;
    let holdings = state.data_port.holdings()?;
    let account = Account {
        available_balance: state.settings.available_balance,
        holdings: &holdings,
    };
    let calculator = OrderCalculator::new(state.settings.brokerage_rate);

    match calculator.submit(&ticket, &instruments, &account) {
        Ok(execution) => {
            let request = &execution.order.request;
            info!(
                "Accepted {} {} x {} at {:.2} (total {:.2})",
                request.side,
                request.symbol,
                request.quantity,
                execution.order.quote.unit_price,
                execution.order.quote.total
            );
            let notice = Notice {
                title: "Order Placed".to_string(),
                message: execution.message,
                success: true,
            };
            let template = trade_page(&state, &ticket.cleared(), Some(notice))?;
            render_page(&headers, "Trade", "trade", &template)
        }
        Err(rejection) => {
            debug!("Rejected {} ticket: {}", ticket.side, rejection);
            let notice = Notice {
                title: rejection.title().to_string(),
                message: rejection.to_string(),
                success: false,
            };
            let template = trade_page(&state, &ticket, Some(notice))?;
            let mut resp = render_page(&headers, "Trade", "trade", &template)?;
            // htmx 1.x does not swap 4xx bodies.
            if !is_htmx_request(&headers) {
                *resp.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
            }
            Ok(resp)
        }
    }
}

pub async fn tutorials(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let tutorials = state.data_port.tutorials()?;
    let paths = state.data_port.learning_paths()?;
    let stats = tutorial_stats(&tutorials);
    let template = TutorialsTemplate::new(&tutorials, &paths, &stats);
    render_page(&headers, "Learn", "tutorials", &template)
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

pub async fn news(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<NewsQuery>,
) -> Result<Response, WebError> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<NewsCategory>()
                .map_err(|e| WebError::bad_request(e.to_string()))?,
        ),
    };
    let active = category.map(|c| c.id()).unwrap_or("all");
    let search = query.q.unwrap_or_default();
    let articles = state.data_port.articles()?;
    let now = Utc::now();

    let template = NewsTemplate {
        tabs: article::category_counts(&articles)
            .iter()
            .map(|c| CategoryTab::new(c, active))
            .collect(),
        articles: article::search(&articles, &search, category)
            .into_iter()
            .map(|a| ArticleRow::new(a, now))
            .collect(),
        trending: article::trending(&articles)
            .into_iter()
            .map(|a| ArticleRow::new(a, now))
            .collect(),
        category: active.to_string(),
        search,
    };
    render_page(&headers, "News", "news", &template)
}

pub async fn profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let profile = state.data_port.profile()?;
    let template = ProfileTemplate::new(
        &profile,
        state.settings.initial_balance,
        &state.settings.currency,
    );
    render_page(&headers, "Profile", "profile", &template)
}

pub async fn not_found() -> WebError {
    WebError::not_found("Page not found")
}
