//! Ledger error types.
//!
//! Each variant means the caller built a malformed entry. None of them is
//! retryable: the entry must not be committed, and the problem is reported
//! as a data-integrity failure.

use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::Direction;

/// Errors raised by the balanced-entry validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A line is expressed in a currency other than the entry's base currency.
    #[error("Entry {entry_id}: line {line_id} is in {actual}, expected base currency {expected}")]
    BaseCurrencyMismatch {
        /// The entry being validated.
        entry_id: String,
        /// The offending line.
        line_id: String,
        /// The entry's base currency (upper-case).
        expected: String,
        /// The line's currency as given.
        actual: String,
    },

    /// A line's sign contradicts its direction.
    #[error(
        "Entry {entry_id}: {direction} line {line_id} must have a {} base amount, got {amount}",
        .direction.required_sign()
    )]
    DirectionViolation {
        /// The entry being validated.
        entry_id: String,
        /// The offending line.
        line_id: String,
        /// The line's declared direction.
        direction: Direction,
        /// The line's base amount.
        amount: Decimal,
    },

    /// Lines are individually valid but do not net to zero.
    #[error("Entry {entry_id} is unbalanced: lines sum to {sum:.6}")]
    UnbalancedEntry {
        /// The entry being validated.
        entry_id: String,
        /// Sum of all base amounts.
        sum: Decimal,
    },

    /// The line amounts add up to more than a `Decimal` can hold.
    #[error("Entry {entry_id} is unbalanced: lines sum overflows")]
    SumOverflow {
        /// The entry being validated.
        entry_id: String,
    },
}

impl LedgerError {
    /// Returns the error code for machine-readable reports.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BaseCurrencyMismatch { .. } => "BASE_CURRENCY_MISMATCH",
            Self::DirectionViolation { .. } => "DIRECTION_VIOLATION",
            Self::UnbalancedEntry { .. } => "UNBALANCED_ENTRY",
            Self::SumOverflow { .. } => "SUM_OVERFLOW",
        }
    }

    /// The entry the error was raised for.
    #[must_use]
    pub fn entry_id(&self) -> &str {
        match self {
            Self::BaseCurrencyMismatch { entry_id, .. }
            | Self::DirectionViolation { entry_id, .. }
            | Self::UnbalancedEntry { entry_id, .. }
            | Self::SumOverflow { entry_id } => entry_id,
        }
    }
}
