//! CSV instrument listing adapter.
//!
//! Expected header: `symbol,name,price,change,change_percent,volume,market_cap,sector`.

use crate::domain::error::TradeProError;
use crate::domain::instrument::Instrument;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub fn load_instruments(path: &Path) -> Result<Vec<Instrument>, TradeProError> {
    let content = fs::read_to_string(path).map_err(|e| TradeProError::Data {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;
    parse_instruments(&content)
}

pub fn parse_instruments(content: &str) -> Result<Vec<Instrument>, TradeProError> {
    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut instruments = Vec::new();
    let mut seen = HashSet::new();

    for (row, result) in rdr.records().enumerate() {
        let line = row + 2;
        let record = result.map_err(|e| TradeProError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;

        let field = |idx: usize, name: &str| -> Result<String, TradeProError> {
            record
                .get(idx)
                .map(|s| s.trim().to_string())
                .ok_or_else(|| TradeProError::Data {
                    reason: format!("line {line}: missing {name} column"),
                })
        };
        let number = |idx: usize, name: &str| -> Result<f64, TradeProError> {
            let raw = field(idx, name)?;
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TradeProError::Data {
                    reason: format!("line {line}: invalid {name} value {raw:?}"),
                })
        };

        let symbol = field(0, "symbol")?.to_uppercase();
        if symbol.is_empty() {
            return Err(TradeProError::Data {
                reason: format!("line {line}: empty symbol"),
            });
        }
        if !seen.insert(symbol.clone()) {
            return Err(TradeProError::Data {
                reason: format!("line {line}: duplicate symbol {symbol}"),
            });
        }

        let name = field(1, "name")?;
        let price = number(2, "price")?;
        if price <= 0.0 {
            return Err(TradeProError::Data {
                reason: format!("line {line}: price must be positive"),
            });
        }
        let change = number(3, "change")?;
        let change_percent = number(4, "change_percent")?;
        let volume_raw = field(5, "volume")?;
        let volume: u64 = volume_raw.parse().map_err(|_| TradeProError::Data {
            reason: format!("line {line}: invalid volume value {volume_raw:?}"),
        })?;
        let market_cap = number(6, "market_cap")?;
        let sector = field(7, "sector")?;

        instruments.push(
            Instrument::new(&symbol, &name, price, change, change_percent)
                .with_market(volume, market_cap, &sector),
        );
    }

    Ok(instruments)
}
