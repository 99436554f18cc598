//! Market news articles, categories and trending selection.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::list_filter::{self, Searchable};

/// Number of trending articles shown beside the feed.
pub const TRENDING_SHOWN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsCategory {
    Earnings,
    Market,
    Technology,
    Crypto,
    Energy,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 5] = [
        NewsCategory::Earnings,
        NewsCategory::Market,
        NewsCategory::Technology,
        NewsCategory::Crypto,
        NewsCategory::Energy,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            NewsCategory::Earnings => "earnings",
            NewsCategory::Market => "market",
            NewsCategory::Technology => "technology",
            NewsCategory::Crypto => "crypto",
            NewsCategory::Energy => "energy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::Earnings => "Earnings",
            NewsCategory::Market => "Market",
            NewsCategory::Technology => "Technology",
            NewsCategory::Crypto => "Crypto",
            NewsCategory::Energy => "Energy",
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown news category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for NewsCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NewsCategory::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub category: NewsCategory,
    pub source: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub read_time: String,
    pub tags: Vec<String>,
    pub trending: bool,
}

impl Searchable for Article {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.summary.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// Article count for one entry of the category tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    /// `None` is the "All News" tab.
    pub category: Option<NewsCategory>,
    pub count: usize,
}

impl CategoryCount {
    pub fn id(&self) -> &'static str {
        self.category.map(|c| c.id()).unwrap_or("all")
    }

    pub fn label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or("All News")
    }
}

/// Applies the search term and the category tab together.
pub fn search<'a>(
    articles: &'a [Article],
    term: &str,
    category: Option<NewsCategory>,
) -> Vec<&'a Article> {
    list_filter::filter(articles, term)
        .into_iter()
        .filter(|a| category.is_none_or(|c| a.category == c))
        .collect()
}

/// Counts per tab, always over the unfiltered list.
pub fn category_counts(articles: &[Article]) -> Vec<CategoryCount> {
    let mut counts = vec![CategoryCount {
        category: None,
        count: articles.len(),
    }];
    counts.extend(NewsCategory::ALL.into_iter().map(|c| CategoryCount {
        category: Some(c),
        count: articles.iter().filter(|a| a.category == c).count(),
    }));
    counts
}

pub fn trending(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|a| a.trending)
        .take(TRENDING_SHOWN)
        .collect()
}
