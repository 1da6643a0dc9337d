//! Amount and balance validation.
//!
//! Both validators accept text or numbers. Text may carry a currency symbol,
//! thousands separators and stray whitespace (`"$1,234.56"`). Accepted values
//! are rounded to 2 decimal places, half toward positive infinity.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::input::RawInput;
use super::limits::{MAX_AMOUNT, MIN_AMOUNT, MONEY_DECIMAL_PLACES};
use super::result::{FieldError, Validation};

const AMOUNT: &str = "Amount";
const BALANCE: &str = "Balance";

/// Validates a transaction amount: a number in `[0.01, 1,000,000,000]`.
///
/// Rejected input falls back to zero.
pub fn validate_amount(input: &RawInput) -> Validation<Decimal> {
    let value = match read_number(input, AMOUNT) {
        Ok(value) => value,
        Err(error) => return Validation::invalid_with(Decimal::ZERO, error),
    };

    if value < MIN_AMOUNT {
        return Validation::invalid_with(
            Decimal::ZERO,
            FieldError::BelowMinimum {
                field: AMOUNT,
                min: MIN_AMOUNT,
            },
        );
    }
    if value > MAX_AMOUNT {
        return Validation::invalid_with(
            Decimal::ZERO,
            FieldError::AboveMaximum {
                field: AMOUNT,
                max: MAX_AMOUNT,
            },
        );
    }

    Validation::Valid(round_money(value))
}

/// Validates an account balance. Negative values (debts) are allowed; only
/// the magnitude is bounded by 1,000,000,000.
///
/// Rejected input falls back to zero.
pub fn validate_balance(input: &RawInput) -> Validation<Decimal> {
    let value = match read_number(input, BALANCE) {
        Ok(value) => value,
        Err(error) => return Validation::invalid_with(Decimal::ZERO, error),
    };

    if value.abs() > MAX_AMOUNT {
        return Validation::invalid_with(
            Decimal::ZERO,
            FieldError::AboveMaximum {
                field: BALANCE,
                max: MAX_AMOUNT,
            },
        );
    }

    Validation::Valid(round_money(value))
}

/// Reads a number from raw input, stripping `$`, `,` and whitespace from text.
pub(crate) fn read_number(input: &RawInput, field: &'static str) -> Result<Decimal, FieldError> {
    match input {
        RawInput::Number(value) => Ok(*value),
        RawInput::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
                .collect();
            parse_decimal(&cleaned).ok_or(FieldError::NotANumber { field })
        }
        RawInput::NotANumber => Err(FieldError::NotANumber { field }),
        RawInput::Missing => Err(FieldError::Required { field }),
    }
}

/// Parses plain (`-12.5`) or scientific (`1.5e3`) notation.
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Rounds to 2 decimal places with ties going toward positive infinity.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, strategy)
}
