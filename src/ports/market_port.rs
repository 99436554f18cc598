//! Read-only market and account data port.

use crate::domain::article::Article;
use crate::domain::content::{LearningPath, Profile, Tutorial};
use crate::domain::error::TradeProError;
use crate::domain::holding::{Holding, Transaction};
use crate::domain::instrument::{find_by_symbol, Instrument};
use crate::domain::portfolio::LeaderboardEntry;

/// Source of everything the screens display.
///
/// Implementations hand out snapshots; nothing here writes back.
pub trait MarketDataPort {
    fn instruments(&self) -> Result<Vec<Instrument>, TradeProError>;

    fn holdings(&self) -> Result<Vec<Holding>, TradeProError>;

    fn transactions(&self) -> Result<Vec<Transaction>, TradeProError>;

    fn articles(&self) -> Result<Vec<Article>, TradeProError>;

    fn tutorials(&self) -> Result<Vec<Tutorial>, TradeProError>;

    fn learning_paths(&self) -> Result<Vec<LearningPath>, TradeProError>;

    fn profile(&self) -> Result<Profile, TradeProError>;

    /// Other traders on the leaderboard, the current user excluded.
    fn rivals(&self) -> Result<Vec<LeaderboardEntry>, TradeProError>;

    fn instrument(&self, symbol: &str) -> Result<Instrument, TradeProError> {
        let instruments = self.instruments()?;
        find_by_symbol(&instruments, symbol)
            .cloned()
            .ok_or_else(|| TradeProError::UnknownInstrument {
                symbol: symbol.to_uppercase(),
            })
    }
}
