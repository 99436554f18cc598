//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::load_instruments;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::seed_adapter::SeedDataAdapter;
use crate::domain::article::{self, NewsCategory};
use crate::domain::config_validation::SimulatorSettings;
use crate::domain::error::{OrderRejection, TradeProError};
use crate::domain::format;
use crate::domain::list_filter;
use crate::domain::order::{Account, OrderCalculator, OrderSide, OrderTicket, ValidatedOrder};
use crate::domain::portfolio::value_portfolio;
use crate::domain::ranking::{top_n, Direction, MOVERS_SHOWN};
use crate::ports::market_port::MarketDataPort;

#[derive(Parser, Debug)]
#[command(name = "tradepro", about = "Virtual stock-trading simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    #[cfg(feature = "web")]
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the instrument listing
    Market {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print the top gainers and losers
    Movers {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = MOVERS_SHOWN)]
        count: usize,
    },
    /// Price an order and check it against the account
    Quote {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, default_value = "buy")]
        side: OrderSide,
        #[arg(long)]
        symbol: String,
        #[arg(short, long)]
        quantity: String,
        #[arg(long)]
        limit_price: Option<String>,
    },
    /// Print holdings valuation and totals
    Portfolio {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print news articles
    News {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<NewsCategory>,
    },
    /// Validate a configuration file and print the effective settings
    CheckConfig {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        #[cfg(feature = "web")]
        Command::Serve { config } => run_serve(&config),
        Command::Market { config, search } => run_market(config.as_deref(), search.as_deref()),
        Command::Movers { config, count } => run_movers(config.as_deref(), count),
        Command::Quote {
            config,
            side,
            symbol,
            quantity,
            limit_price,
        } => run_quote(
            config.as_deref(),
            side,
            &symbol,
            &quantity,
            limit_price.as_deref(),
        ),
        Command::Portfolio { config } => run_portfolio(config.as_deref()),
        Command::News {
            config,
            search,
            category,
        } => run_news(config.as_deref(), search.as_deref(), category),
        Command::CheckConfig { config } => run_check_config(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Settings from `path`, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<SimulatorSettings, TradeProError> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            let config = FileConfigAdapter::from_file(path)?;
            SimulatorSettings::from_config(&config)
        }
        None => Ok(SimulatorSettings::default()),
    }
}

/// Seed data, with the listing replaced by the configured CSV file if any.
pub fn build_data_port(settings: &SimulatorSettings) -> Result<SeedDataAdapter, TradeProError> {
    match &settings.instruments_csv {
        Some(path) => {
            let instruments = load_instruments(path)?;
            info!(
                "Loaded {} instruments from {}",
                instruments.len(),
                path.display()
            );
            Ok(SeedDataAdapter::with_instruments(instruments))
        }
        None => Ok(SeedDataAdapter::new()),
    }
}

/// Validates an order the same way the trade form does.
///
/// An unlisted symbol is reported as [`TradeProError::UnknownInstrument`]
/// rather than as an order rejection, once the earlier form checks pass.
pub fn quote_order(
    settings: &SimulatorSettings,
    port: &dyn MarketDataPort,
    side: OrderSide,
    symbol: &str,
    quantity: &str,
    limit_price: Option<&str>,
) -> Result<ValidatedOrder, TradeProError> {
    let instruments = port.instruments()?;
    let holdings = port.holdings()?;

    let mut ticket = OrderTicket::new(side, Some(symbol)).with_quantity(quantity);
    if let Some(price) = limit_price {
        ticket = ticket.with_limit(price);
    }
    let account = Account {
        available_balance: settings.available_balance,
        holdings: &holdings,
    };
    OrderCalculator::new(settings.brokerage_rate)
        .validate(&ticket, &instruments, &account)
        .map_err(|rejection| match rejection {
            OrderRejection::UnknownInstrument { symbol } => {
                TradeProError::UnknownInstrument { symbol }
            }
            other => other.into(),
        })
}

#[cfg(feature = "web")]
fn run_serve(config_path: &Path) -> Result<(), TradeProError> {
    use crate::adapters::web::{build_router, AppState};
    use std::sync::Arc;

    let settings = load_settings(Some(config_path))?;
    let data_port: Arc<dyn MarketDataPort + Send + Sync> = Arc::new(build_data_port(&settings)?);
    let addr = settings.listen;
    let router = build_router(AppState {
        data_port,
        settings,
    });

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Listening on http://{addr}");
        axum::serve(listener, router).await
    })?;
    Ok(())
}

fn run_market(config: Option<&Path>, search: Option<&str>) -> Result<(), TradeProError> {
    let settings = load_settings(config)?;
    let port = build_data_port(&settings)?;
    let instruments = port.instruments()?;
    let shown = list_filter::filter(&instruments, search.unwrap_or(""));

    println!(
        "{:<8} {:<28} {:>14} {:>22} {:>8} {:>10}  Sector",
        "Symbol", "Name", "Price", "Change", "Volume", "Mkt Cap"
    );
    for i in &shown {
        println!(
            "{:<8} {:<28} {:>14} {:>22} {:>8} {:>10}  {}",
            i.symbol,
            i.name,
            format::money(&settings.currency, i.price),
            format::change(&settings.currency, i.change, i.change_percent),
            format::compact(i.volume as f64),
            format::compact(i.market_cap),
            i.sector
        );
    }
    println!("{} of {} stocks", shown.len(), instruments.len());
    Ok(())
}

fn run_movers(config: Option<&Path>, count: usize) -> Result<(), TradeProError> {
    let settings = load_settings(config)?;
    let port = build_data_port(&settings)?;
    let instruments = port.instruments()?;

    for (title, direction) in [("Top Gainers", Direction::Gainers), ("Top Losers", Direction::Losers)] {
        println!("{title}");
        let movers = top_n(&instruments, count, direction);
        if movers.is_empty() {
            println!("  (none)");
        }
        for i in movers {
            println!(
                "  {:<8} {:>10} {:>8}",
                i.symbol,
                format::money(&settings.currency, i.price),
                format::signed_percent(i.change_percent)
            );
        }
    }
    Ok(())
}

fn run_quote(
    config: Option<&Path>,
    side: OrderSide,
    symbol: &str,
    quantity: &str,
    limit_price: Option<&str>,
) -> Result<(), TradeProError> {
    let settings = load_settings(config)?;
    let port = build_data_port(&settings)?;
    let order = quote_order(&settings, &port, side, symbol, quantity, limit_price)?;

    let currency = &settings.currency;
    let q = &order.quote;
    println!("{} {} {} ({})", q.side, q.quantity, order.request.symbol, order.request.kind.id());
    println!("  Price per share:  {}", format::money(currency, q.unit_price));
    println!("  Subtotal:         {}", format::money(currency, q.subtotal));
    println!(
        "  Brokerage ({}%): {}",
        settings.brokerage_rate * 100.0,
        format::money(currency, q.fee)
    );
    println!("  {:<17} {}", format!("{}:", q.side.total_caption()), format::money(currency, q.total));
    Ok(())
}

fn run_portfolio(config: Option<&Path>) -> Result<(), TradeProError> {
    let settings = load_settings(config)?;
    let port = build_data_port(&settings)?;
    let instruments = port.instruments()?;
    let holdings = port.holdings()?;

    let summary = value_portfolio(&holdings, &instruments);

    let currency = &settings.currency;
    println!(
        "{:<8} {:>6} {:>12} {:>12} {:>14} {:>14} {:>8}",
        "Symbol", "Qty", "Avg Price", "Current", "Value", "P&L", "P&L %"
    );
    for h in &summary.holdings {
        println!(
            "{:<8} {:>6} {:>12} {:>12} {:>14} {:>14} {:>8}",
            h.symbol,
            h.quantity,
            format::money(currency, h.avg_price),
            format::money(currency, h.current_price),
            format::money(currency, h.value),
            format::signed_money(currency, h.pnl),
            format::signed_percent(h.pnl_percent)
        );
    }
    println!();
    println!("Total Value: {}", format::money(currency, summary.total_value));
    println!(
        "Total P&L:   {} ({})",
        format::signed_money(currency, summary.total_pnl),
        format::signed_percent(summary.total_pnl_percent)
    );
    println!("Available:   {}", format::money(currency, settings.available_balance));
    Ok(())
}

fn run_news(
    config: Option<&Path>,
    search: Option<&str>,
    category: Option<NewsCategory>,
) -> Result<(), TradeProError> {
    let settings = load_settings(config)?;
    let port = build_data_port(&settings)?;
    let articles = port.articles()?;
    let now = chrono::Utc::now();

    let shown = article::search(&articles, search.unwrap_or(""), category);
    for a in &shown {
        println!("[{}] {}", a.category.label(), a.title);
        println!("  {}", a.summary);
        println!(
            "  {} · {} · {} · {}",
            a.source,
            a.author,
            format::time_ago(a.published_at, now),
            a.read_time
        );
    }
    println!("{} of {} articles", shown.len(), articles.len());
    Ok(())
}

fn run_check_config(config_path: &Path) -> Result<(), TradeProError> {
    let settings = load_settings(Some(config_path))?;
    println!("Config is valid");
    println!("  available_balance = {}", settings.available_balance);
    println!("  initial_balance   = {}", settings.initial_balance);
    println!("  portfolio_value   = {}", settings.portfolio_value);
    println!("  brokerage_rate    = {}", settings.brokerage_rate);
    println!("  currency          = {}", settings.currency);
    match &settings.instruments_csv {
        Some(path) => println!("  instruments_csv   = {}", path.display()),
        None => println!("  instruments_csv   = (built-in listing)"),
    }
    println!("  listen            = {}", settings.listen);
    Ok(())
}
