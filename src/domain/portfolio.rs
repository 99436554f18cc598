//! Portfolio valuation, allocation and the dashboard figures.

use log::warn;

use super::holding::Holding;
use super::instrument::{find_by_symbol, Instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingValuation {
    pub symbol: String,
    pub name: String,
    pub quantity: u64,
    pub avg_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}

impl HoldingValuation {
    fn new(holding: &Holding, instrument: &Instrument) -> Self {
        let cost = holding.cost_basis();
        let pnl = holding.unrealized_pnl(instrument.price);
        HoldingValuation {
            symbol: instrument.symbol.clone(),
            name: instrument.name.clone(),
            quantity: holding.quantity,
            avg_price: holding.avg_price,
            current_price: instrument.price,
            value: holding.market_value(instrument.price),
            pnl,
            pnl_percent: if cost > 0.0 { pnl / cost * 100.0 } else { 0.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub holdings: Vec<HoldingValuation>,
    pub total_value: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    pub symbol: String,
    pub value: f64,
    pub percent: f64,
}

/// Values every holding at its instrument's current price.
///
/// Holdings whose symbol is not listed are left out.
pub fn value_portfolio(holdings: &[Holding], instruments: &[Instrument]) -> PortfolioSummary {
    let valued: Vec<HoldingValuation> = holdings
        .iter()
        .filter_map(|h| match find_by_symbol(instruments, &h.symbol) {
            Some(instrument) => Some(HoldingValuation::new(h, instrument)),
            None => {
                warn!("holding {} has no listed price, skipping", h.symbol);
                None
            }
        })
        .collect();

    let total_value: f64 = valued.iter().map(|v| v.value).sum();
    let total_pnl: f64 = valued.iter().map(|v| v.pnl).sum();
    let invested = total_value - total_pnl;
    let total_pnl_percent = if invested > 0.0 {
        total_pnl / invested * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        holdings: valued,
        total_value,
        total_pnl,
        total_pnl_percent,
    }
}

impl PortfolioSummary {
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        self.holdings
            .iter()
            .map(|h| AllocationSlice {
                symbol: h.symbol.clone(),
                value: h.value,
                percent: if self.total_value > 0.0 {
                    h.value / self.total_value * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

/// Headline figures of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountOverview {
    pub portfolio_value: f64,
    pub initial_balance: f64,
    pub profit: f64,
    pub profit_percent: f64,
}

impl AccountOverview {
    pub fn new(portfolio_value: f64, initial_balance: f64) -> Self {
        let profit = portfolio_value - initial_balance;
        AccountOverview {
            portfolio_value,
            initial_balance,
            profit,
            profit_percent: if initial_balance > 0.0 {
                profit / initial_balance * 100.0
            } else {
                0.0
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub profit: f64,
    pub percent: f64,
    pub is_you: bool,
}

impl LeaderboardEntry {
    pub fn new(name: &str, profit: f64, percent: f64) -> Self {
        LeaderboardEntry {
            rank: 0,
            name: name.to_string(),
            profit,
            percent,
            is_you: false,
        }
    }
}

/// Places the current user among the other traders, best profit first.
pub fn leaderboard(others: &[LeaderboardEntry], you: &AccountOverview) -> Vec<LeaderboardEntry> {
    let mut board: Vec<LeaderboardEntry> = others.to_vec();
    board.push(LeaderboardEntry {
        rank: 0,
        name: "You".to_string(),
        profit: you.profit,
        percent: you.profit_percent,
        is_you: true,
    });
    board.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    for (i, entry) in board.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    board
}
