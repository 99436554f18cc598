//! Trade ticket quoting and pre-submission validation.
//!
//! A ticket is the raw form state. [`OrderCalculator::validate`] turns it into
//! an [`OrderRequest`] with its [`OrderQuote`], or an [`OrderRejection`].
//! Submitting an accepted order only produces an [`Execution`] notice: the
//! simulator never debits the balance or updates holdings.

use std::fmt;
use std::str::FromStr;

use super::error::OrderRejection;
use super::holding::{held_quantity, Holding};
use super::instrument::{find_by_symbol, Instrument};

/// Flat brokerage applied when nothing is configured (0.1%).
pub const DEFAULT_BROKERAGE_RATE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl OrderSide {
    pub fn id(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Buy",
            OrderSide::Sell => "Sell",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            OrderSide::Buy => "bought",
            OrderSide::Sell => "sold",
        }
    }

    /// Caption of the total line: what a buy costs, what a sell returns.
    pub fn total_caption(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Total Cost",
            OrderSide::Sell => "Total Proceeds",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected one of {expected}, got {got:?}")]
pub struct ParseChoiceError {
    pub expected: &'static str,
    pub got: String,
}

impl FromStr for OrderSide {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderSide::Buy),
            "sell" => Ok(OrderSide::Sell),
            _ => Err(ParseChoiceError {
                expected: "buy, sell",
                got: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderKind {
    #[default]
    Market,
    Limit,
}

impl OrderKind {
    pub fn id(&self) -> &'static str {
        match self {
            OrderKind::Market => "market",
            OrderKind::Limit => "limit",
        }
    }
}

impl FromStr for OrderKind {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "market" => Ok(OrderKind::Market),
            "limit" => Ok(OrderKind::Limit),
            _ => Err(ParseChoiceError {
                expected: "market, limit",
                got: s.to_string(),
            }),
        }
    }
}

/// Unvalidated trade form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderTicket {
    pub side: OrderSide,
    pub symbol: Option<String>,
    pub quantity: String,
    pub kind: OrderKind,
    pub limit_price: String,
}

impl OrderTicket {
    pub fn new(side: OrderSide, symbol: Option<&str>) -> Self {
        OrderTicket {
            side,
            symbol: symbol
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_uppercase),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    pub fn with_limit(mut self, limit_price: impl Into<String>) -> Self {
        self.kind = OrderKind::Limit;
        self.limit_price = limit_price.into();
        self
    }

    /// Ticket shown after a successful submission: side, symbol and kind
    /// survive, quantity and limit price are emptied.
    pub fn cleared(&self) -> Self {
        OrderTicket {
            side: self.side,
            symbol: self.symbol.clone(),
            kind: self.kind,
            quantity: String::new(),
            limit_price: String::new(),
        }
    }

    fn parsed_quantity(&self) -> Option<u64> {
        self.quantity.trim().parse::<u64>().ok().filter(|q| *q > 0)
    }

    fn parsed_limit_price(&self) -> Option<f64> {
        self.limit_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
    }
}

/// A well-formed order. `limit_price` is `Some` exactly when `kind` is limit.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub side: OrderSide,
    pub symbol: String,
    pub quantity: u64,
    pub kind: OrderKind,
    pub limit_price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderQuote {
    pub side: OrderSide,
    pub quantity: u64,
    pub unit_price: f64,
    pub subtotal: f64,
    pub fee: f64,
    pub total: f64,
}

/// Cost (buy) or proceeds (sell) of `quantity` shares at `unit_price`.
pub fn quote(side: OrderSide, quantity: u64, unit_price: f64, brokerage_rate: f64) -> OrderQuote {
    let subtotal = quantity as f64 * unit_price;
    let fee = subtotal * brokerage_rate;
    let total = match side {
        OrderSide::Buy => subtotal + fee,
        OrderSide::Sell => subtotal - fee,
    };
    OrderQuote {
        side,
        quantity,
        unit_price,
        subtotal,
        fee,
        total,
    }
}

/// Funds and positions a ticket is checked against.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    pub available_balance: f64,
    pub holdings: &'a [Holding],
}

impl Account<'_> {
    pub fn held(&self, symbol: &str) -> u64 {
        held_quantity(self.holdings, symbol)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub request: OrderRequest,
    pub quote: OrderQuote,
}

/// Transient confirmation of a simulated fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub order: ValidatedOrder,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderCalculator {
    brokerage_rate: f64,
}

impl Default for OrderCalculator {
    fn default() -> Self {
        OrderCalculator::new(DEFAULT_BROKERAGE_RATE)
    }
}

impl OrderCalculator {
    pub fn new(brokerage_rate: f64) -> Self {
        OrderCalculator { brokerage_rate }
    }

    pub fn brokerage_rate(&self) -> f64 {
        self.brokerage_rate
    }

    pub fn quote(&self, side: OrderSide, quantity: u64, unit_price: f64) -> OrderQuote {
        quote(side, quantity, unit_price, self.brokerage_rate)
    }

    /// Quote for the summary panel, when the ticket has enough to price it.
    pub fn preview(&self, ticket: &OrderTicket, instruments: &[Instrument]) -> Option<OrderQuote> {
        let instrument = find_by_symbol(instruments, ticket.symbol.as_deref()?)?;
        let quantity = ticket.parsed_quantity()?;
        let unit_price = match ticket.kind {
            OrderKind::Market => instrument.price,
            OrderKind::Limit => ticket.parsed_limit_price()?,
        };
        Some(self.quote(ticket.side, quantity, unit_price))
    }

    pub fn validate(
        &self,
        ticket: &OrderTicket,
        instruments: &[Instrument],
        account: &Account<'_>,
    ) -> Result<ValidatedOrder, OrderRejection> {
        let symbol = ticket
            .symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(OrderRejection::NoInstrumentSelected)?;

        let quantity = ticket
            .parsed_quantity()
            .ok_or(OrderRejection::InvalidQuantity)?;

        let instrument =
            find_by_symbol(instruments, symbol).ok_or_else(|| OrderRejection::UnknownInstrument {
                symbol: symbol.to_string(),
            })?;

        let limit_price = match ticket.kind {
            OrderKind::Market => None,
            OrderKind::Limit => Some(
                ticket
                    .parsed_limit_price()
                    .ok_or(OrderRejection::InvalidLimitPrice)?,
            ),
        };
        let unit_price = limit_price.unwrap_or(instrument.price);
        let quote = self.quote(ticket.side, quantity, unit_price);

        match ticket.side {
            OrderSide::Buy if quote.total > account.available_balance => {
                return Err(OrderRejection::InsufficientBalance {
                    required: quote.total,
                    available: account.available_balance,
                });
            }
            OrderSide::Sell => {
                let held = account.held(&instrument.symbol);
                if quantity > held {
                    return Err(OrderRejection::InsufficientHoldings {
                        symbol: instrument.symbol.clone(),
                        held,
                    });
                }
            }
            OrderSide::Buy => {}
        }

        Ok(ValidatedOrder {
            request: OrderRequest {
                side: ticket.side,
                symbol: instrument.symbol.clone(),
                quantity,
                kind: ticket.kind,
                limit_price,
            },
            quote,
        })
    }

    /// Validates and "executes" the ticket. Nothing is written anywhere.
    pub fn submit(
        &self,
        ticket: &OrderTicket,
        instruments: &[Instrument],
        account: &Account<'_>,
    ) -> Result<Execution, OrderRejection> {
        let order = self.validate(ticket, instruments, account)?;
        let message = format!(
            "Successfully {} {} shares of {}.",
            order.request.side.past_tense(),
            order.request.quantity,
            order.request.symbol
        );
        Ok(Execution { order, message })
    }
}
