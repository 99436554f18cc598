//! Seeded holdings and trade history.

use chrono::NaiveDate;

use super::order::OrderSide;

#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub quantity: u64,
    pub avg_price: f64,
}

impl Holding {
    pub fn new(symbol: &str, quantity: u64, avg_price: f64) -> Self {
        Holding {
            symbol: symbol.to_string(),
            quantity,
            avg_price,
        }
    }

    pub fn cost_basis(&self) -> f64 {
        self.quantity as f64 * self.avg_price
    }

    pub fn market_value(&self, price: f64) -> f64 {
        self.quantity as f64 * price
    }

    pub fn unrealized_pnl(&self, price: f64) -> f64 {
        self.quantity as f64 * (price - self.avg_price)
    }
}

/// Quantity of `symbol` held, zero when there is no holding.
pub fn held_quantity(holdings: &[Holding], symbol: &str) -> u64 {
    holdings
        .iter()
        .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
        .map(|h| h.quantity)
        .unwrap_or(0)
}

/// A past fill shown in the transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: u64,
    pub price: f64,
}

impl Transaction {
    pub fn total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
