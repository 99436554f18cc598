//! Built-in mock market used when no external listing is configured.
//!
//! Every value here is a literal. The adapter never changes after
//! construction, so all reads return the same snapshot.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::article::{Article, NewsCategory};
use crate::domain::content::{
    Achievement, LearningPath, Profile, TradingStats, Tutorial, TutorialLevel,
};
use crate::domain::error::TradeProError;
use crate::domain::holding::{Holding, Transaction};
use crate::domain::instrument::{Instrument, InstrumentProfile, PricePoint};
use crate::domain::order::OrderSide;
use crate::domain::portfolio::LeaderboardEntry;
use crate::ports::market_port::MarketDataPort;

#[derive(Debug)]
pub struct SeedDataAdapter {
    instruments: Vec<Instrument>,
}

impl Default for SeedDataAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedDataAdapter {
    pub fn new() -> Self {
        Self {
            instruments: seed_instruments(),
        }
    }

    /// Seed data with the listing replaced, e.g. by one read from CSV.
    pub fn with_instruments(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }
}

impl MarketDataPort for SeedDataAdapter {
    fn instruments(&self) -> Result<Vec<Instrument>, TradeProError> {
        Ok(self.instruments.clone())
    }

    fn holdings(&self) -> Result<Vec<Holding>, TradeProError> {
        Ok(vec![
            Holding::new("AAPL", 15, 165.20),
            Holding::new("TSLA", 8, 250.30),
            Holding::new("GOOGL", 12, 135.50),
            Holding::new("INFY", 100, 17.80),
        ])
    }

    fn transactions(&self) -> Result<Vec<Transaction>, TradeProError> {
        let tx = |day: u32, symbol: &str, side: OrderSide, quantity: u64, price: f64| Transaction {
            date: date(2024, 1, day),
            symbol: symbol.to_string(),
            side,
            quantity,
            price,
        };
        Ok(vec![
            tx(15, "AAPL", OrderSide::Buy, 10, 173.28),
            tx(14, "TSLA", OrderSide::Sell, 5, 248.00),
            tx(13, "INFY", OrderSide::Buy, 50, 18.31),
            tx(12, "GOOGL", OrderSide::Buy, 12, 135.50),
            tx(11, "AAPL", OrderSide::Buy, 5, 157.12),
        ])
    }

    fn articles(&self) -> Result<Vec<Article>, TradeProError> {
        Ok(seed_articles())
    }

    fn tutorials(&self) -> Result<Vec<Tutorial>, TradeProError> {
        Ok(seed_tutorials())
    }

    fn learning_paths(&self) -> Result<Vec<LearningPath>, TradeProError> {
        let path = |name: &str, description: &str, ids: [u32; 3]| LearningPath {
            name: name.to_string(),
            description: description.to_string(),
            tutorial_ids: ids.to_vec(),
        };
        Ok(vec![
            path(
                "Complete Beginner",
                "Start from the basics and build your foundation",
                [1, 2, 3],
            ),
            path(
                "Active Trader",
                "Learn advanced strategies for frequent trading",
                [2, 3, 6],
            ),
            path(
                "Long-term Investor",
                "Focus on fundamental analysis and value investing",
                [1, 4, 5],
            ),
        ])
    }

    fn profile(&self) -> Result<Profile, TradeProError> {
        let achievement = |title: &str, description: &str, earned_on: Option<NaiveDate>| {
            Achievement {
                title: title.to_string(),
                description: description.to_string(),
                earned_on,
            }
        };
        Ok(Profile {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "New York, NY".into(),
            joined: date(2024, 1, 1),
            experience: "Intermediate".into(),
            risk_profile: "Moderate".into(),
            stats: TradingStats {
                total_trades: 145,
                win_rate: 68.5,
                total_pnl: 25_000.0,
                best_trade: 3_500.0,
                worst_trade: -1_200.0,
                avg_holding_period: "5.2 days".into(),
                favorite_stock: "AAPL".into(),
                rank: 3,
            },
            achievements: vec![
                achievement(
                    "First Trade",
                    "Completed your first successful trade",
                    Some(date(2024, 1, 2)),
                ),
                achievement(
                    "Profit Streak",
                    "5 consecutive profitable trades",
                    Some(date(2024, 1, 10)),
                ),
                achievement(
                    "Big Winner",
                    "Single trade profit over 2,500",
                    Some(date(2024, 1, 12)),
                ),
                achievement("Risk Manager", "Use stop-loss orders on 10 trades", None),
                achievement(
                    "Diversified Portfolio",
                    "Hold stocks from 5 different sectors",
                    None,
                ),
                achievement("Marathon Trader", "Complete 100 trades", Some(date(2024, 1, 14))),
            ],
        })
    }

    fn rivals(&self) -> Result<Vec<LeaderboardEntry>, TradeProError> {
        Ok(vec![
            LeaderboardEntry::new("Alex Chen", 45_000.0, 45.0),
            LeaderboardEntry::new("Sarah Kim", 38_500.0, 38.5),
            LeaderboardEntry::new("Mike Ross", 22_000.0, 22.0),
        ])
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn published(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn seed_instruments() -> Vec<Instrument> {
    let aapl_profile = InstrumentProfile {
        pe_ratio: Some(28.5),
        high_52w: Some(198.23),
        low_52w: Some(124.17),
        description: Some(
            "Apple Inc. designs, manufactures, and markets smartphones, personal computers, \
             tablets, wearables, and accessories worldwide."
                .into(),
        ),
        intraday: [
            ("9:30", 173.28),
            ("10:00", 174.15),
            ("10:30", 173.89),
            ("11:00", 175.20),
            ("11:30", 174.67),
            ("12:00", 175.43),
            ("12:30", 176.12),
            ("1:00", 175.85),
            ("1:30", 175.43),
        ]
        .into_iter()
        .map(|(time, price)| PricePoint {
            time: time.to_string(),
            price,
        })
        .collect(),
    };

    vec![
        Instrument::new("AAPL", "Apple Inc.", 175.43, 2.15, 1.24)
            .with_market(52_300_000, 2.8e12, "Technology")
            .with_profile(aapl_profile),
        Instrument::new("TSLA", "Tesla Inc.", 242.68, -5.32, -2.14)
            .with_market(45_100_000, 772e9, "Automotive"),
        Instrument::new("GOOGL", "Alphabet Inc.", 138.21, 1.85, 1.36)
            .with_market(28_700_000, 1.7e12, "Technology"),
        Instrument::new("MSFT", "Microsoft Corp.", 378.85, 4.12, 1.10)
            .with_market(22_400_000, 2.8e12, "Technology"),
        Instrument::new("INFY", "Infosys Limited", 18.76, 0.45, 2.46)
            .with_market(8_200_000, 78e9, "IT Services"),
        Instrument::new("TCS", "Tata Consultancy Services", 3420.50, 15.20, 0.45)
            .with_market(1_100_000, 124e9, "IT Services"),
        Instrument::new("RELIANCE", "Reliance Industries", 2456.80, -12.45, -0.50)
            .with_market(3_800_000, 166e9, "Energy"),
        Instrument::new("HDFC", "HDFC Bank Limited", 1598.25, 8.95, 0.56)
            .with_market(2_900_000, 121e9, "Banking"),
    ]
}

fn seed_articles() -> Vec<Article> {
    let article = |id: u32,
                   title: &str,
                   summary: &str,
                   category: NewsCategory,
                   source: &str,
                   author: &str,
                   at: DateTime<Utc>,
                   minutes: u32,
                   tags: &[&str],
                   trending: bool| Article {
        id,
        title: title.to_string(),
        summary: summary.to_string(),
        category,
        source: source.to_string(),
        author: author.to_string(),
        published_at: at,
        read_time: format!("{minutes} min read"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        trending,
    };

    vec![
        article(
            1,
            "Apple Reports Record Q4 Earnings, Beats Analyst Expectations",
            "Apple Inc. announced quarterly revenue of $89.5 billion, up 1% year over year, \
             driven by strong iPhone 15 sales and services growth.",
            NewsCategory::Earnings,
            "Financial Times",
            "Sarah Johnson",
            published(10, 30),
            3,
            &["AAPL", "earnings", "technology"],
            true,
        ),
        article(
            2,
            "Tesla Stock Surges on Robotaxi Development News",
            "Tesla shares jumped 8% in pre-market trading following reports of significant \
             progress in their autonomous driving technology.",
            NewsCategory::Technology,
            "Reuters",
            "Mike Chen",
            published(9, 15),
            4,
            &["TSLA", "autonomous", "innovation"],
            true,
        ),
        article(
            3,
            "Federal Reserve Hints at Potential Rate Cuts in 2024",
            "Fed Chair Powell suggests monetary policy may become less restrictive as \
             inflation continues to moderate toward the 2% target.",
            NewsCategory::Market,
            "Bloomberg",
            "David Williams",
            published(8, 45),
            5,
            &["fed", "rates", "policy"],
            false,
        ),
        article(
            4,
            "Indian IT Sector Shows Strong Growth in Q3 Results",
            "Major Indian IT companies including TCS and Infosys report double-digit growth \
             in quarterly revenues, driven by AI and cloud services.",
            NewsCategory::Earnings,
            "Economic Times",
            "Priya Sharma",
            published(7, 20),
            3,
            &["TCS", "INFY", "IT services"],
            false,
        ),
        article(
            5,
            "Cryptocurrency Market Rally Continues as Bitcoin Hits New High",
            "Bitcoin reaches $48,000 as institutional adoption grows and ETF approvals drive \
             mainstream acceptance.",
            NewsCategory::Crypto,
            "CoinDesk",
            "Alex Turner",
            published(6, 30),
            2,
            &["bitcoin", "crypto", "ETF"],
            true,
        ),
        article(
            6,
            "Energy Stocks Rally on Rising Oil Prices and Supply Concerns",
            "Oil prices climb above $75 per barrel amid geopolitical tensions and OPEC+ \
             production cuts, benefiting energy sector stocks.",
            NewsCategory::Energy,
            "Wall Street Journal",
            "Robert Martinez",
            published(5, 45),
            4,
            &["oil", "energy", "commodities"],
            false,
        ),
    ]
}

fn seed_tutorials() -> Vec<Tutorial> {
    let tutorial = |id: u32,
                    title: &str,
                    description: &str,
                    level: TutorialLevel,
                    duration_minutes: u32,
                    completed: bool,
                    topics: [&str; 4]| Tutorial {
        id,
        title: title.to_string(),
        description: description.to_string(),
        level,
        duration_minutes,
        completed,
        topics: topics.iter().map(|t| t.to_string()).collect(),
    };

    vec![
        tutorial(
            1,
            "Stock Market Basics",
            "Learn the fundamentals of stock market investing, including key terminology and concepts.",
            TutorialLevel::Beginner,
            15,
            true,
            ["What are stocks?", "Market cap", "P/E ratio", "Dividends"],
        ),
        tutorial(
            2,
            "Reading Stock Charts",
            "Understand how to read and interpret stock price charts and technical indicators.",
            TutorialLevel::Beginner,
            20,
            true,
            ["Candlestick charts", "Volume", "Moving averages", "Support & Resistance"],
        ),
        tutorial(
            3,
            "Types of Orders",
            "Learn about different order types and when to use each one effectively.",
            TutorialLevel::Intermediate,
            12,
            false,
            ["Market orders", "Limit orders", "Stop-loss orders", "Good Till Cancelled"],
        ),
        tutorial(
            4,
            "Risk Management",
            "Essential strategies for managing risk and protecting your investment capital.",
            TutorialLevel::Intermediate,
            25,
            false,
            ["Position sizing", "Diversification", "Stop-loss strategies", "Risk-reward ratio"],
        ),
        tutorial(
            5,
            "Fundamental Analysis",
            "Learn how to evaluate a company's financial health and growth prospects.",
            TutorialLevel::Advanced,
            35,
            false,
            ["Financial statements", "Valuation ratios", "Industry analysis", "Economic indicators"],
        ),
        tutorial(
            6,
            "Technical Analysis",
            "Master chart patterns and technical indicators for timing your trades.",
            TutorialLevel::Advanced,
            40,
            false,
            ["Chart patterns", "RSI & MACD", "Bollinger Bands", "Fibonacci retracements"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holding::held_quantity;
    use std::collections::HashSet;

    #[test]
    fn listing_symbols_are_unique() {
        let instruments = SeedDataAdapter::new().instruments().unwrap();
        let symbols: HashSet<_> = instruments.iter().map(|i| i.symbol.as_str()).collect();
        assert_eq!(symbols.len(), instruments.len());
        assert_eq!(instruments.len(), 8);
    }

    #[test]
    fn every_holding_is_listed() {
        let adapter = SeedDataAdapter::new();
        let instruments = adapter.instruments().unwrap();
        for h in adapter.holdings().unwrap() {
            assert!(instruments.iter().any(|i| i.symbol == h.symbol), "{}", h.symbol);
        }
    }

    #[test]
    fn instrument_lookup() {
        let adapter = SeedDataAdapter::new();
        assert_eq!(adapter.instrument("infy").unwrap().symbol, "INFY");
        assert!(matches!(
            adapter.instrument("ZZZ"),
            Err(TradeProError::UnknownInstrument { .. })
        ));
    }

    #[test]
    fn replaced_listing_keeps_holdings() {
        let adapter = SeedDataAdapter::with_instruments(vec![Instrument::new(
            "AAPL", "Apple Inc.", 1.0, 0.0, 0.0,
        )]);
        assert_eq!(adapter.instruments().unwrap().len(), 1);
        assert_eq!(held_quantity(&adapter.holdings().unwrap(), "AAPL"), 15);
    }

    #[test]
    fn seed_dates_are_valid() {
        let adapter = SeedDataAdapter::new();
        assert_eq!(adapter.profile().unwrap().joined, date(2024, 1, 1));
        assert!(adapter
            .articles()
            .unwrap()
            .iter()
            .all(|a| a.published_at > DateTime::<Utc>::default()));
    }
}
