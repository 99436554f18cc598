#![allow(dead_code)]

use std::io::Write;

use tradepro::adapters::seed_adapter::SeedDataAdapter;
use tradepro::domain::article::Article;
use tradepro::domain::content::{LearningPath, Profile, Tutorial};
use tradepro::domain::error::TradeProError;
use tradepro::domain::holding::{Holding, Transaction};
pub use tradepro::domain::instrument::Instrument;
use tradepro::domain::portfolio::LeaderboardEntry;
use tradepro::ports::market_port::MarketDataPort;

/// In-memory port with a small listing. Content screens fall back to the
/// seed data; `failure` makes every call return a data error.
pub struct MockMarketDataPort {
    pub instruments: Vec<Instrument>,
    pub holdings: Vec<Holding>,
    pub transactions: Vec<Transaction>,
    pub failure: Option<String>,
    seed: SeedDataAdapter,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self {
            instruments: sample_instruments(),
            holdings: vec![Holding::new("ACME", 10, 90.0)],
            transactions: Vec::new(),
            failure: None,
            seed: SeedDataAdapter::new(),
        }
    }

    pub fn with_holdings(mut self, holdings: Vec<Holding>) -> Self {
        self.holdings = holdings;
        self
    }

    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    fn check(&self) -> Result<(), TradeProError> {
        match &self.failure {
            Some(reason) => Err(TradeProError::Data {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn instruments(&self) -> Result<Vec<Instrument>, TradeProError> {
        self.check()?;
        Ok(self.instruments.clone())
    }

    fn holdings(&self) -> Result<Vec<Holding>, TradeProError> {
        self.check()?;
        Ok(self.holdings.clone())
    }

    fn transactions(&self) -> Result<Vec<Transaction>, TradeProError> {
        self.check()?;
        Ok(self.transactions.clone())
    }

    fn articles(&self) -> Result<Vec<Article>, TradeProError> {
        self.check()?;
        self.seed.articles()
    }

    fn tutorials(&self) -> Result<Vec<Tutorial>, TradeProError> {
        self.check()?;
        self.seed.tutorials()
    }

    fn learning_paths(&self) -> Result<Vec<LearningPath>, TradeProError> {
        self.check()?;
        self.seed.learning_paths()
    }

    fn profile(&self) -> Result<Profile, TradeProError> {
        self.check()?;
        self.seed.profile()
    }

    fn rivals(&self) -> Result<Vec<LeaderboardEntry>, TradeProError> {
        self.check()?;
        self.seed.rivals()
    }
}

pub fn sample_instruments() -> Vec<Instrument> {
    vec![
        Instrument::new("ACME", "Acme Corp.", 100.0, 2.0, 2.04).with_market(
            1_000_000,
            5e9,
            "Industrials",
        ),
        Instrument::new("BOLT", "Bolt Motors", 50.0, -1.5, -2.91).with_market(
            250_000,
            8e8,
            "Automotive",
        ),
        Instrument::new("CALM", "Calm Utilities", 20.0, 0.0, 0.0).with_market(
            90_000,
            1.2e8,
            "Utilities",
        ),
    ]
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
