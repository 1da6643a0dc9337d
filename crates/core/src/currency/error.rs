//! Currency conversion errors.

use pocketbook_shared::types::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while converting between currencies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No rate is known for the currency pair.
    #[error("No exchange rate found for {from} to {to}")]
    NoExchangeRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// The known rate is zero or negative.
    #[error("Exchange rate for {from} to {to} must be positive, got {rate}")]
    InvalidExchangeRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// The offending rate.
        rate: Decimal,
    },

    /// The converted amount is too large to represent.
    #[error("Converting from {from} to {to} overflows")]
    ConversionOverflow {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },
}

impl ConversionError {
    /// Returns the error code for machine-readable reports.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoExchangeRate { .. } => "NO_EXCHANGE_RATE",
            Self::InvalidExchangeRate { .. } => "INVALID_EXCHANGE_RATE",
            Self::ConversionOverflow { .. } => "CONVERSION_OVERFLOW",
        }
    }
}
