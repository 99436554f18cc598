//! Learning material and the trader profile.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl TutorialLevel {
    pub fn label(&self) -> &'static str {
        match self {
            TutorialLevel::Beginner => "Beginner",
            TutorialLevel::Intermediate => "Intermediate",
            TutorialLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tutorial {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub level: TutorialLevel,
    pub duration_minutes: u32,
    pub completed: bool,
    pub topics: Vec<String>,
}

/// A curated sequence of tutorials.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningPath {
    pub name: String,
    pub description: String,
    pub tutorial_ids: Vec<u32>,
}

impl LearningPath {
    /// `(completed, total)` over the tutorials of this path that exist.
    pub fn progress(&self, tutorials: &[Tutorial]) -> (usize, usize) {
        let members: Vec<&Tutorial> = tutorials
            .iter()
            .filter(|t| self.tutorial_ids.contains(&t.id))
            .collect();
        let done = members.iter().filter(|t| t.completed).count();
        (done, members.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TutorialStats {
    pub total: usize,
    pub completed: usize,
    pub total_minutes: u32,
    pub progress_percent: f64,
}

pub fn tutorial_stats(tutorials: &[Tutorial]) -> TutorialStats {
    let total = tutorials.len();
    let completed = tutorials.iter().filter(|t| t.completed).count();
    TutorialStats {
        total,
        completed,
        total_minutes: tutorials.iter().map(|t| t.duration_minutes).sum(),
        progress_percent: if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradingStats {
    pub total_trades: u32,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
    pub avg_holding_period: String,
    pub favorite_stock: String,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub earned_on: Option<NaiveDate>,
}

impl Achievement {
    pub fn earned(&self) -> bool {
        self.earned_on.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub joined: NaiveDate,
    pub experience: String,
    pub risk_profile: String,
    pub stats: TradingStats,
    pub achievements: Vec<Achievement>,
}

impl Profile {
    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.earned()).count()
    }
}
