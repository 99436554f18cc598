//! Domain error types.

/// Reasons a trade ticket is refused before submission.
///
/// These are user-input failures: they are shown next to the form and
/// never abort anything beyond the current submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderRejection {
    #[error("Please select a stock to trade.")]
    NoInstrumentSelected,

    #[error("Please enter a valid quantity.")]
    InvalidQuantity,

    #[error("{symbol} is not listed on this market.")]
    UnknownInstrument { symbol: String },

    #[error("Please enter a valid limit price.")]
    InvalidLimitPrice,

    #[error("You don't have enough balance for this trade (need {required:.2}, have {available:.2}).")]
    InsufficientBalance { required: f64, available: f64 },

    #[error("You only have {held} shares of {symbol}.")]
    InsufficientHoldings { symbol: String, held: u64 },
}

impl OrderRejection {
    /// Short title used for the notice heading.
    pub fn title(&self) -> &'static str {
        match self {
            OrderRejection::InsufficientBalance { .. } => "Insufficient Balance",
            OrderRejection::InsufficientHoldings { .. } => "Insufficient Holdings",
            _ => "Error",
        }
    }
}

/// Top-level error type for tradepro.
#[derive(Debug, thiserror::Error)]
pub enum TradeProError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("unknown instrument: {symbol}")]
    UnknownInstrument { symbol: String },

    #[error(transparent)]
    OrderRejected(#[from] OrderRejection),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradeProError> for std::process::ExitCode {
    fn from(err: &TradeProError) -> Self {
        let code: u8 = match err {
            TradeProError::Io(_) => 1,
            TradeProError::ConfigParse { .. } | TradeProError::ConfigInvalid { .. } => 2,
            TradeProError::Data { .. } => 3,
            TradeProError::UnknownInstrument { .. } => 4,
            TradeProError::OrderRejected(_) => 6,
        };
        std::process::ExitCode::from(code)
    }
}
