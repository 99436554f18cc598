//! End-to-end domain pipelines over the seed data.

mod common;

use approx::assert_relative_eq;
use common::*;
use tradepro::adapters::seed_adapter::SeedDataAdapter;
use tradepro::domain::article::{self, NewsCategory};
use tradepro::domain::config_validation::SimulatorSettings;
use tradepro::domain::content::tutorial_stats;
use tradepro::domain::error::OrderRejection;
use tradepro::domain::list_filter;
use tradepro::domain::order::{Account, OrderCalculator, OrderSide, OrderTicket};
use tradepro::domain::portfolio::{AccountOverview, leaderboard, value_portfolio};
use tradepro::domain::ranking::{Direction, MOVERS_SHOWN, top_n};
use tradepro::ports::market_port::MarketDataPort;

fn symbols(items: &[&Instrument]) -> Vec<String> {
    items.iter().map(|i| i.symbol.clone()).collect()
}

#[test]
fn seed_movers() {
    let instruments = SeedDataAdapter::new().instruments().unwrap();
    let gainers = top_n(&instruments, MOVERS_SHOWN, Direction::Gainers);
    assert_eq!(symbols(&gainers), vec!["INFY", "GOOGL", "AAPL"]);
    let losers = top_n(&instruments, MOVERS_SHOWN, Direction::Losers);
    assert_eq!(symbols(&losers), vec!["TSLA", "RELIANCE"]);
}

#[test]
fn seed_search_by_name_and_symbol() {
    let instruments = SeedDataAdapter::new().instruments().unwrap();
    assert_eq!(symbols(&list_filter::filter(&instruments, "bank")), vec!["HDFC"]);
    assert_eq!(symbols(&list_filter::filter(&instruments, "inf")), vec!["INFY"]);
    assert_eq!(list_filter::filter(&instruments, "").len(), instruments.len());
    assert!(list_filter::filter(&instruments, "zzz").is_empty());
}

#[test]
fn seed_portfolio_totals() {
    let port = SeedDataAdapter::new();
    let summary = value_portfolio(&port.holdings().unwrap(), &port.instruments().unwrap());
    assert_eq!(summary.holdings.len(), 4);
    assert_relative_eq!(summary.total_value, 8107.41, epsilon = 1e-6);
    assert_relative_eq!(summary.total_pnl, 221.01, epsilon = 1e-6);

    let allocation = summary.allocation();
    let share: f64 = allocation.iter().map(|s| s.percent).sum();
    assert_relative_eq!(share, 100.0, epsilon = 1e-9);
}

#[test]
fn seed_leaderboard_places_you_third() {
    let port = SeedDataAdapter::new();
    let settings = SimulatorSettings::default();
    let overview = AccountOverview::new(settings.portfolio_value, settings.initial_balance);
    let board = leaderboard(&port.rivals().unwrap(), &overview);
    let you = board.iter().find(|e| e.is_you).unwrap();
    assert_eq!(you.rank, 3);
    assert_relative_eq!(you.profit, 25_000.0);
    assert_eq!(board.len(), 4);
}

#[test]
fn seed_news_views() {
    let articles = SeedDataAdapter::new().articles().unwrap();
    let counts = article::category_counts(&articles);
    assert_eq!(counts[0].count, 6);
    let per_category: usize = counts[1..].iter().map(|c| c.count).sum();
    assert_eq!(per_category, 6);

    let earnings = article::search(&articles, "", Some(NewsCategory::Earnings));
    assert_eq!(earnings.len(), 2);
    assert_eq!(article::trending(&articles).len(), 3);
}

#[test]
fn seed_tutorial_stats_are_consistent() {
    let tutorials = SeedDataAdapter::new().tutorials().unwrap();
    let stats = tutorial_stats(&tutorials);
    assert_eq!(stats.total, 6);
    assert!(stats.completed <= stats.total);
}

#[test]
fn accepted_order_leaves_account_untouched() {
    let port = SeedDataAdapter::new();
    let settings = SimulatorSettings::default();
    let instruments = port.instruments().unwrap();
    let holdings_before = port.holdings().unwrap();
    let account = Account {
        available_balance: settings.available_balance,
        holdings: &holdings_before,
    };
    let calculator = OrderCalculator::new(settings.brokerage_rate);

    let buy = OrderTicket::new(OrderSide::Buy, Some("AAPL")).with_quantity("10");
    let sell = OrderTicket::new(OrderSide::Sell, Some("TSLA")).with_quantity("8");
    calculator.submit(&buy, &instruments, &account).unwrap();
    calculator.submit(&sell, &instruments, &account).unwrap();

    assert_eq!(port.holdings().unwrap(), holdings_before);
    assert_relative_eq!(account.available_balance, settings.available_balance);
    assert_eq!(
        SimulatorSettings::default().available_balance,
        settings.available_balance
    );
}

#[test]
fn repeated_submissions_never_deplete_holdings() {
    let port = SeedDataAdapter::new();
    let instruments = port.instruments().unwrap();
    let holdings = port.holdings().unwrap();
    let account = Account {
        available_balance: 50_000.0,
        holdings: &holdings,
    };
    let ticket = OrderTicket::new(OrderSide::Sell, Some("TSLA")).with_quantity("8");
    for _ in 0..3 {
        assert!(OrderCalculator::default().submit(&ticket, &instruments, &account).is_ok());
    }
    let too_many = ticket.clone().with_quantity("9");
    assert_eq!(
        OrderCalculator::default()
            .submit(&too_many, &instruments, &account)
            .unwrap_err(),
        OrderRejection::InsufficientHoldings {
            symbol: "TSLA".into(),
            held: 8
        }
    );
}

#[test]
fn mock_listing_quotes_at_exact_figures() {
    let port = MockMarketDataPort::new();
    let instruments = port.instruments().unwrap();
    let quote = OrderCalculator::default()
        .preview(
            &OrderTicket::new(OrderSide::Buy, Some("acme")).with_quantity("10"),
            &instruments,
        )
        .unwrap();
    assert_relative_eq!(quote.subtotal, 1000.0);
    assert_relative_eq!(quote.fee, 1.0);
    assert_relative_eq!(quote.total, 1001.0);
}
