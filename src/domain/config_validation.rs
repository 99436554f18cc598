//! Simulator settings and their validation.
//!
//! Every key is optional; validation only rejects values that are present
//! and out of range.

use crate::domain::error::TradeProError;
use crate::domain::order::DEFAULT_BROKERAGE_RATE;
use crate::ports::config_port::ConfigPort;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_AVAILABLE_BALANCE: f64 = 50_000.0;
pub const DEFAULT_INITIAL_BALANCE: f64 = 100_000.0;
pub const DEFAULT_PORTFOLIO_VALUE: f64 = 125_000.0;
pub const DEFAULT_CURRENCY: &str = "₹";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorSettings {
    pub available_balance: f64,
    pub initial_balance: f64,
    pub portfolio_value: f64,
    pub brokerage_rate: f64,
    pub currency: String,
    pub instruments_csv: Option<PathBuf>,
    pub listen: SocketAddr,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        SimulatorSettings {
            available_balance: DEFAULT_AVAILABLE_BALANCE,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            portfolio_value: DEFAULT_PORTFOLIO_VALUE,
            brokerage_rate: DEFAULT_BROKERAGE_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
            instruments_csv: None,
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl SimulatorSettings {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, TradeProError> {
        validate_simulator_config(config)?;
        Ok(SimulatorSettings {
            available_balance: config.get_double(
                "simulator",
                "available_balance",
                DEFAULT_AVAILABLE_BALANCE,
            ),
            initial_balance: config.get_double(
                "simulator",
                "initial_balance",
                DEFAULT_INITIAL_BALANCE,
            ),
            portfolio_value: config.get_double(
                "simulator",
                "portfolio_value",
                DEFAULT_PORTFOLIO_VALUE,
            ),
            brokerage_rate: config.get_double(
                "simulator",
                "brokerage_rate",
                DEFAULT_BROKERAGE_RATE,
            ),
            currency: config
                .get_string("simulator", "currency")
                .map(|c| c.trim().to_string())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            instruments_csv: config
                .get_string("data", "instruments_csv")
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            listen: parse_listen(config)?,
        })
    }
}

pub fn validate_simulator_config(config: &dyn ConfigPort) -> Result<(), TradeProError> {
    validate_positive(config, "available_balance", DEFAULT_AVAILABLE_BALANCE)?;
    validate_positive(config, "initial_balance", DEFAULT_INITIAL_BALANCE)?;
    validate_portfolio_value(config)?;
    validate_brokerage_rate(config)?;
    validate_currency(config)?;
    parse_listen(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: &str) -> TradeProError {
    TradeProError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

// A present but unparsable number must not silently fall back to the default.
fn read_number(
    config: &dyn ConfigPort,
    key: &str,
    default: f64,
) -> Result<f64, TradeProError> {
    match config.get_string("simulator", key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| invalid("simulator", key, &format!("{key} must be a number"))),
    }
}

fn validate_positive(config: &dyn ConfigPort, key: &str, default: f64) -> Result<(), TradeProError> {
    let value = read_number(config, key, default)?;
    if value <= 0.0 {
        return Err(invalid("simulator", key, &format!("{key} must be positive")));
    }
    Ok(())
}

fn validate_portfolio_value(config: &dyn ConfigPort) -> Result<(), TradeProError> {
    let value = read_number(config, "portfolio_value", DEFAULT_PORTFOLIO_VALUE)?;
    if value < 0.0 {
        return Err(invalid(
            "simulator",
            "portfolio_value",
            "portfolio_value must be non-negative",
        ));
    }
    Ok(())
}

fn validate_brokerage_rate(config: &dyn ConfigPort) -> Result<(), TradeProError> {
    let value = read_number(config, "brokerage_rate", DEFAULT_BROKERAGE_RATE)?;
    if !(0.0..1.0).contains(&value) {
        return Err(invalid(
            "simulator",
            "brokerage_rate",
            "brokerage_rate must be between 0 and 1",
        ));
    }
    Ok(())
}

fn validate_currency(config: &dyn ConfigPort) -> Result<(), TradeProError> {
    match config.get_string("simulator", "currency") {
        Some(s) if s.trim().is_empty() => Err(invalid(
            "simulator",
            "currency",
            "currency must not be empty",
        )),
        _ => Ok(()),
    }
}

fn parse_listen(config: &dyn ConfigPort) -> Result<SocketAddr, TradeProError> {
    let raw = config
        .get_string("server", "listen")
        .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
    raw.trim()
        .parse()
        .map_err(|_| invalid("server", "listen", "listen must be an address like 127.0.0.1:3000"))
}
