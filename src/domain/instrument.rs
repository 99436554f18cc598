//! Listed instruments and their quoted prices.

use super::list_filter::Searchable;

/// One point of an intraday price series.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub time: String,
    pub price: f64,
}

/// Extra figures shown on the stock detail screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstrumentProfile {
    pub pe_ratio: Option<f64>,
    pub high_52w: Option<f64>,
    pub low_52w: Option<f64>,
    pub description: Option<String>,
    pub intraday: Vec<PricePoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: f64,
    pub sector: String,
    pub profile: InstrumentProfile,
}

impl Instrument {
    pub fn new(symbol: &str, name: &str, price: f64, change: f64, change_percent: f64) -> Self {
        Instrument {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
            volume: 0,
            market_cap: 0.0,
            sector: String::new(),
            profile: InstrumentProfile::default(),
        }
    }

    pub fn with_market(mut self, volume: u64, market_cap: f64, sector: &str) -> Self {
        self.volume = volume;
        self.market_cap = market_cap;
        self.sector = sector.to_string();
        self
    }

    pub fn with_profile(mut self, profile: InstrumentProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }

    /// Two-letter badge shown in listings.
    pub fn initials(&self) -> &str {
        let end = self
            .symbol
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(self.symbol.len());
        &self.symbol[..end]
    }
}

impl Searchable for Instrument {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.symbol.as_str(), self.name.as_str()]
    }
}

/// Exact symbol lookup, ignoring ASCII case.
pub fn find_by_symbol<'a>(instruments: &'a [Instrument], symbol: &str) -> Option<&'a Instrument> {
    instruments
        .iter()
        .find(|i| i.symbol.eq_ignore_ascii_case(symbol.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<Instrument> {
        vec![
            Instrument::new("AAPL", "Apple Inc.", 175.43, 2.15, 1.24),
            Instrument::new("TSLA", "Tesla Inc.", 242.68, -5.32, -2.14),
        ]
    }

    #[test]
    fn find_by_symbol_is_case_insensitive() {
        let instruments = listing();
        let found = find_by_symbol(&instruments, "tsla").unwrap();
        assert_eq!(found.name, "Tesla Inc.");
    }

    #[test]
    fn find_by_symbol_missing() {
        assert!(find_by_symbol(&listing(), "MSFT").is_none());
    }

    #[test]
    fn initials_takes_two_chars() {
        assert_eq!(listing()[0].initials(), "AA");
        assert_eq!(Instrument::new("X", "X Corp", 1.0, 0.0, 0.0).initials(), "X");
    }

    #[test]
    fn direction_of_change() {
        let instruments = listing();
        assert!(instruments[0].is_up());
        assert!(!instruments[1].is_up());
    }

    #[test]
    fn search_fields_are_symbol_and_name() {
        let instruments = listing();
        assert_eq!(instruments[0].search_fields(), vec!["AAPL", "Apple Inc."]);
    }
}
