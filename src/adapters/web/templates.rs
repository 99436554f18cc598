//! HTML templates using Askama.
//!
//! Page templates render the `#content` body only; [`BasePage`] wraps it in
//! the layout for non-HTMX requests. Rows carry pre-formatted strings so the
//! templates stay free of arithmetic.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::domain::article::{Article, CategoryCount};
use crate::domain::content::{LearningPath, Profile, Tutorial, TutorialStats};
use crate::domain::format;
use crate::domain::holding::{Holding, Transaction};
use crate::domain::instrument::Instrument;
use crate::domain::order::{OrderQuote, OrderTicket};
use crate::domain::portfolio::{
    AccountOverview, AllocationSlice, HoldingValuation, LeaderboardEntry, PortfolioSummary,
};

#[derive(Template)]
#[template(path = "base.html")]
pub struct BasePage<'a> {
    pub title: &'a str,
    pub active: &'a str,
    pub content: &'a str,
}

pub struct StockRow {
    pub symbol: String,
    pub name: String,
    pub initials: String,
    pub price: String,
    pub change: String,
    pub up: bool,
    pub volume: String,
    pub market_cap: String,
    pub sector: String,
}

impl StockRow {
    pub fn new(instrument: &Instrument, currency: &str) -> Self {
        StockRow {
            symbol: instrument.symbol.clone(),
            name: instrument.name.clone(),
            initials: instrument.initials().to_string(),
            price: format::money(currency, instrument.price),
            change: format::change(currency, instrument.change, instrument.change_percent),
            up: instrument.is_up(),
            volume: format::compact(instrument.volume as f64),
            market_cap: format!("{currency}{}", format::compact(instrument.market_cap)),
            sector: instrument.sector.clone(),
        }
    }
}

pub struct MoverRow {
    pub symbol: String,
    pub percent: String,
}

impl MoverRow {
    pub fn new(instrument: &Instrument) -> Self {
        MoverRow {
            symbol: instrument.symbol.clone(),
            percent: format::signed_percent(instrument.change_percent),
        }
    }
}

pub struct TransactionRow {
    pub date: String,
    pub symbol: String,
    pub side: String,
    pub is_buy: bool,
    pub quantity: u64,
    pub price: String,
    pub total: String,
}

impl TransactionRow {
    pub fn new(tx: &Transaction, currency: &str) -> Self {
        TransactionRow {
            date: tx.date.format("%Y-%m-%d").to_string(),
            symbol: tx.symbol.clone(),
            side: tx.side.to_string(),
            is_buy: tx.side == crate::domain::order::OrderSide::Buy,
            quantity: tx.quantity,
            price: format::money(currency, tx.price),
            total: format::money(currency, tx.total()),
        }
    }
}

pub struct LeaderRow {
    pub rank: usize,
    pub name: String,
    pub profit: String,
    pub percent: String,
    pub is_you: bool,
}

impl LeaderRow {
    pub fn new(entry: &LeaderboardEntry, currency: &str) -> Self {
        LeaderRow {
            rank: entry.rank,
            name: entry.name.clone(),
            profit: format::signed_money(currency, entry.profit),
            percent: format::signed_percent(entry.percent),
            is_you: entry.is_you,
        }
    }
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub starting_balance: String,
    pub instrument_count: usize,
    pub tutorial_count: usize,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub portfolio_value: String,
    pub profit: String,
    pub profit_percent: String,
    pub profit_up: bool,
    pub available_balance: String,
    pub holdings_count: usize,
    pub top_stocks: Vec<StockRow>,
    pub recent_trades: Vec<TransactionRow>,
    pub leaderboard: Vec<LeaderRow>,
}

impl DashboardTemplate {
    pub fn new(
        overview: &AccountOverview,
        available_balance: f64,
        holdings_count: usize,
        top_stocks: &[&Instrument],
        recent: &[Transaction],
        board: &[LeaderboardEntry],
        currency: &str,
    ) -> Self {
        DashboardTemplate {
            portfolio_value: format::money(currency, overview.portfolio_value),
            profit: format::signed_money(currency, overview.profit),
            profit_percent: format::signed_percent(overview.profit_percent),
            profit_up: overview.profit >= 0.0,
            available_balance: format::money(currency, available_balance),
            holdings_count,
            top_stocks: top_stocks.iter().map(|i| StockRow::new(i, currency)).collect(),
            recent_trades: recent.iter().map(|t| TransactionRow::new(t, currency)).collect(),
            leaderboard: board.iter().map(|e| LeaderRow::new(e, currency)).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "market.html")]
pub struct MarketTemplate {
    pub search: String,
    pub gainers: Vec<MoverRow>,
    pub losers: Vec<MoverRow>,
    pub stocks: Vec<StockRow>,
    pub listed: usize,
}

pub struct PricePointRow {
    pub time: String,
    pub price: String,
}

pub struct ArticleRow {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub source: String,
    pub author: String,
    pub ago: String,
    pub read_time: String,
    pub tags: Vec<String>,
}

impl ArticleRow {
    pub fn new(article: &Article, now: DateTime<Utc>) -> Self {
        ArticleRow {
            id: article.id,
            title: article.title.clone(),
            summary: article.summary.clone(),
            category: article.category.label().to_string(),
            source: article.source.clone(),
            author: article.author.clone(),
            ago: format::time_ago(article.published_at, now),
            read_time: article.read_time.clone(),
            tags: article.tags.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "stock_detail.html")]
pub struct StockDetailTemplate {
    pub stock: StockRow,
    pub pe_ratio: String,
    pub high_52w: String,
    pub low_52w: String,
    pub description: String,
    pub intraday: Vec<PricePointRow>,
    pub held: u64,
    pub related_news: Vec<ArticleRow>,
}

impl StockDetailTemplate {
    pub fn new(
        instrument: &Instrument,
        held: u64,
        related: &[&Article],
        now: DateTime<Utc>,
        currency: &str,
    ) -> Self {
        let money_or_dash = |v: Option<f64>| {
            v.map(|x| format::money(currency, x))
                .unwrap_or_else(|| "-".to_string())
        };
        let profile = &instrument.profile;
        StockDetailTemplate {
            stock: StockRow::new(instrument, currency),
            pe_ratio: profile
                .pe_ratio
                .map(|pe| format!("{pe:.1}"))
                .unwrap_or_else(|| "-".to_string()),
            high_52w: money_or_dash(profile.high_52w),
            low_52w: money_or_dash(profile.low_52w),
            description: profile.description.clone().unwrap_or_default(),
            intraday: profile
                .intraday
                .iter()
                .map(|p| PricePointRow {
                    time: p.time.clone(),
                    price: format::money(currency, p.price),
                })
                .collect(),
            held,
            related_news: related.iter().map(|a| ArticleRow::new(a, now)).collect(),
        }
    }
}

pub struct HoldingRow {
    pub symbol: String,
    pub name: String,
    pub quantity: u64,
    pub avg_price: String,
    pub current_price: String,
    pub value: String,
    pub pnl: String,
    pub pnl_percent: String,
    pub up: bool,
}

impl HoldingRow {
    pub fn new(v: &HoldingValuation, currency: &str) -> Self {
        HoldingRow {
            symbol: v.symbol.clone(),
            name: v.name.clone(),
            quantity: v.quantity,
            avg_price: format::money(currency, v.avg_price),
            current_price: format::money(currency, v.current_price),
            value: format::money(currency, v.value),
            pnl: format::signed_money(currency, v.pnl),
            pnl_percent: format::signed_percent(v.pnl_percent),
            up: v.pnl >= 0.0,
        }
    }
}

pub struct AllocationRow {
    pub symbol: String,
    pub value: String,
    pub percent: String,
}

impl AllocationRow {
    pub fn new(slice: &AllocationSlice, currency: &str) -> Self {
        AllocationRow {
            symbol: slice.symbol.clone(),
            value: format::money(currency, slice.value),
            percent: format!("{:.1}%", slice.percent),
        }
    }
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub total_value: String,
    pub total_pnl: String,
    pub total_pnl_percent: String,
    pub up: bool,
    pub holdings: Vec<HoldingRow>,
    pub allocation: Vec<AllocationRow>,
    pub transactions: Vec<TransactionRow>,
}

impl PortfolioTemplate {
    pub fn new(summary: &PortfolioSummary, transactions: &[Transaction], currency: &str) -> Self {
        PortfolioTemplate {
            total_value: format::money(currency, summary.total_value),
            total_pnl: format::signed_money(currency, summary.total_pnl),
            total_pnl_percent: format::signed_percent(summary.total_pnl_percent),
            up: summary.total_pnl >= 0.0,
            holdings: summary
                .holdings
                .iter()
                .map(|h| HoldingRow::new(h, currency))
                .collect(),
            allocation: summary
                .allocation()
                .iter()
                .map(|s| AllocationRow::new(s, currency))
                .collect(),
            transactions: transactions
                .iter()
                .map(|t| TransactionRow::new(t, currency))
                .collect(),
        }
    }
}

pub struct SymbolOption {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub selected: bool,
}

pub struct HoldingChoice {
    pub symbol: String,
    pub quantity: u64,
    pub avg_price: String,
    pub selected: bool,
}

pub struct QuoteRows {
    pub shares: u64,
    pub unit_price: String,
    pub subtotal: String,
    pub fee: String,
    pub total: String,
    pub caption: String,
}

impl QuoteRows {
    pub fn new(quote: &OrderQuote, currency: &str) -> Self {
        QuoteRows {
            shares: quote.quantity,
            unit_price: format::money(currency, quote.unit_price),
            subtotal: format::money(currency, quote.subtotal),
            fee: format::money(currency, quote.fee),
            total: format::money(currency, quote.total),
            caption: quote.side.total_caption().to_string(),
        }
    }
}

pub struct Notice {
    pub title: String,
    pub message: String,
    pub success: bool,
}

#[derive(Template)]
#[template(path = "trade.html")]
pub struct TradeTemplate {
    pub side: String,
    pub side_label: String,
    pub is_sell: bool,
    pub symbol: String,
    pub quantity: String,
    pub is_limit: bool,
    pub limit_price: String,
    pub options: Vec<SymbolOption>,
    pub selected: Option<StockRow>,
    pub available_to_sell: Option<u64>,
    pub quote: Option<QuoteRows>,
    pub notice: Option<Notice>,
    pub available_balance: String,
    pub brokerage: String,
    pub holdings: Vec<HoldingChoice>,
}

impl TradeTemplate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ticket: &OrderTicket,
        instruments: &[Instrument],
        holdings: &[Holding],
        quote: Option<&OrderQuote>,
        notice: Option<Notice>,
        available_balance: f64,
        brokerage_rate: f64,
        currency: &str,
    ) -> Self {
        let symbol = ticket.symbol.clone().unwrap_or_default();
        let selected = crate::domain::instrument::find_by_symbol(instruments, &symbol);
        let is_sell = ticket.side == crate::domain::order::OrderSide::Sell;
        TradeTemplate {
            side: ticket.side.id().to_string(),
            side_label: ticket.side.label().to_string(),
            is_sell,
            quantity: ticket.quantity.clone(),
            is_limit: ticket.kind == crate::domain::order::OrderKind::Limit,
            limit_price: ticket.limit_price.clone(),
            options: instruments
                .iter()
                .map(|i| SymbolOption {
                    symbol: i.symbol.clone(),
                    name: i.name.clone(),
                    price: format::money(currency, i.price),
                    selected: i.symbol.eq_ignore_ascii_case(&symbol),
                })
                .collect(),
            selected: selected.map(|i| StockRow::new(i, currency)),
            available_to_sell: match (is_sell, selected) {
                (true, Some(i)) => Some(crate::domain::holding::held_quantity(holdings, &i.symbol)),
                _ => None,
            },
            quote: quote.map(|q| QuoteRows::new(q, currency)),
            notice,
            available_balance: format::money(currency, available_balance),
            brokerage: format!("{}%", brokerage_rate * 100.0),
            holdings: holdings
                .iter()
                .map(|h| HoldingChoice {
                    symbol: h.symbol.clone(),
                    quantity: h.quantity,
                    avg_price: format::money(currency, h.avg_price),
                    selected: h.symbol.eq_ignore_ascii_case(&symbol),
                })
                .collect(),
            symbol,
        }
    }
}

pub struct CategoryTab {
    pub id: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

impl CategoryTab {
    pub fn new(count: &CategoryCount, active_id: &str) -> Self {
        CategoryTab {
            id: count.id().to_string(),
            label: count.label().to_string(),
            count: count.count,
            active: count.id() == active_id,
        }
    }
}

#[derive(Template)]
#[template(path = "news.html")]
pub struct NewsTemplate {
    pub search: String,
    pub category: String,
    pub tabs: Vec<CategoryTab>,
    pub articles: Vec<ArticleRow>,
    pub trending: Vec<ArticleRow>,
}

pub struct TutorialRow {
    pub title: String,
    pub description: String,
    pub level: String,
    pub duration: String,
    pub completed: bool,
    pub topics: Vec<String>,
}

pub struct PathRow {
    pub name: String,
    pub description: String,
    pub progress: String,
}

#[derive(Template)]
#[template(path = "tutorials.html")]
pub struct TutorialsTemplate {
    pub total: usize,
    pub completed: usize,
    pub total_minutes: u32,
    pub progress: String,
    pub tutorials: Vec<TutorialRow>,
    pub paths: Vec<PathRow>,
}

impl TutorialsTemplate {
    pub fn new(tutorials: &[Tutorial], paths: &[LearningPath], stats: &TutorialStats) -> Self {
        TutorialsTemplate {
            total: stats.total,
            completed: stats.completed,
            total_minutes: stats.total_minutes,
            progress: format!("{:.0}%", stats.progress_percent),
            tutorials: tutorials
                .iter()
                .map(|t| TutorialRow {
                    title: t.title.clone(),
                    description: t.description.clone(),
                    level: t.level.label().to_string(),
                    duration: format!("{} min", t.duration_minutes),
                    completed: t.completed,
                    topics: t.topics.clone(),
                })
                .collect(),
            paths: paths
                .iter()
                .map(|p| {
                    let (done, total) = p.progress(tutorials);
                    PathRow {
                        name: p.name.clone(),
                        description: p.description.clone(),
                        progress: format!("{done}/{total} completed"),
                    }
                })
                .collect(),
        }
    }
}

pub struct AchievementRow {
    pub title: String,
    pub description: String,
    pub earned_on: Option<String>,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub joined: String,
    pub experience: String,
    pub risk_profile: String,
    pub total_trades: u32,
    pub win_rate: String,
    pub total_pnl: String,
    pub best_trade: String,
    pub worst_trade: String,
    pub avg_holding_period: String,
    pub favorite_stock: String,
    pub rank: u32,
    pub earned: usize,
    pub achievements: Vec<AchievementRow>,
    pub initial_balance: String,
}

impl ProfileTemplate {
    pub fn new(profile: &Profile, initial_balance: f64, currency: &str) -> Self {
        let stats = &profile.stats;
        ProfileTemplate {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            location: profile.location.clone(),
            joined: profile.joined.format("%B %-d, %Y").to_string(),
            experience: profile.experience.clone(),
            risk_profile: profile.risk_profile.clone(),
            total_trades: stats.total_trades,
            win_rate: format!("{:.1}%", stats.win_rate),
            total_pnl: format::signed_money(currency, stats.total_pnl),
            best_trade: format::signed_money(currency, stats.best_trade),
            worst_trade: format::signed_money(currency, stats.worst_trade),
            avg_holding_period: stats.avg_holding_period.clone(),
            favorite_stock: stats.favorite_stock.clone(),
            rank: stats.rank,
            earned: profile.earned_count(),
            achievements: profile
                .achievements
                .iter()
                .map(|a| AchievementRow {
                    title: a.title.clone(),
                    description: a.description.clone(),
                    earned_on: a.earned_on.map(|d| d.format("%Y-%m-%d").to_string()),
                })
                .collect(),
            initial_balance: format::money(currency, initial_balance),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub status: u16,
}
