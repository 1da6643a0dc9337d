//! Whitelisted codes, account names, percentages and day-of-month fields.

use pocketbook_shared::types::{AccountType, Currency, CurrencyWhitelist};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::amount::{parse_decimal, round_money};
use super::input::RawInput;
use super::limits::{
    MAX_ACCOUNT_NAME_CHARS, MAX_DAY_OF_MONTH, MAX_PERCENTAGE, MIN_DAY_OF_MONTH, MIN_PERCENTAGE,
};
use super::result::{FieldError, Validation};
use super::sanitize::sanitize_text;

const CURRENCY: &str = "Currency";
const ACCOUNT_TYPE: &str = "Account type";
const ACCOUNT_NAME: &str = "Account name";
const PERCENTAGE: &str = "Percentage";
const DAY_OF_MONTH: &str = "Day of month";

/// Validates a currency code against every supported currency.
///
/// Matching is exact and case-sensitive. Rejected input falls back to USD.
pub fn validate_currency(input: &str) -> Validation<Currency> {
    validate_currency_in(input, &CurrencyWhitelist::default())
}

/// Validates a currency code against an explicit whitelist.
pub fn validate_currency_in(input: &str, allowed: &CurrencyWhitelist) -> Validation<Currency> {
    match allowed.find(input) {
        Some(currency) => Validation::Valid(currency),
        None => Validation::invalid_with(Currency::Usd, FieldError::NotAllowed { field: CURRENCY }),
    }
}

/// Validates an account type tag. Rejected input falls back to `other`.
pub fn validate_account_type(input: &str) -> Validation<AccountType> {
    match input.parse::<AccountType>() {
        Ok(kind) => Validation::Valid(kind),
        Err(_) => Validation::invalid_with(
            AccountType::Other,
            FieldError::NotAllowed {
                field: ACCOUNT_TYPE,
            },
        ),
    }
}

/// Validates and sanitizes an account name.
///
/// `None` stands for a non-text input. The name is sanitized as free text and
/// then cut to 100 characters. Besides empty input, a name that sanitizes to
/// nothing (`"   "`, `"<script>"`) is also rejected as missing.
pub fn validate_account_name(input: Option<&str>) -> Validation<String> {
    let Some(name) = input.filter(|name| !name.is_empty()) else {
        return Validation::invalid(FieldError::Required {
            field: ACCOUNT_NAME,
        });
    };

    let cleaned: String = sanitize_text(Some(name))
        .chars()
        .take(MAX_ACCOUNT_NAME_CHARS)
        .collect();
    if cleaned.is_empty() {
        return Validation::invalid(FieldError::Required {
            field: ACCOUNT_NAME,
        });
    }

    Validation::Valid(cleaned)
}

/// Validates an optional percentage in `[0, 100]`, rounded to 2 places.
///
/// A missing value is valid and stays missing.
pub fn validate_percentage(input: &RawInput) -> Validation<Option<Decimal>> {
    let value = match input {
        RawInput::Missing => return Validation::Valid(None),
        RawInput::Number(value) => *value,
        RawInput::Text(text) => match parse_decimal(text.trim()) {
            Some(value) => value,
            None => return Validation::invalid(FieldError::NotANumber { field: PERCENTAGE }),
        },
        RawInput::NotANumber => {
            return Validation::invalid(FieldError::NotANumber { field: PERCENTAGE });
        }
    };

    if value < MIN_PERCENTAGE || value > MAX_PERCENTAGE {
        return Validation::invalid(FieldError::OutOfRange {
            field: PERCENTAGE,
            min: MIN_PERCENTAGE,
            max: MAX_PERCENTAGE,
        });
    }

    Validation::Valid(Some(round_money(value)))
}

/// Validates an optional day of month: a whole number in `[1, 31]`.
///
/// A missing value is valid and stays missing.
pub fn validate_day_of_month(input: &RawInput) -> Validation<Option<u8>> {
    let value = match input {
        RawInput::Missing => return Validation::Valid(None),
        RawInput::Number(value) => Some(*value),
        RawInput::Text(text) => parse_decimal(text.trim()),
        RawInput::NotANumber => None,
    };

    let Some(value) = value.filter(|value| value.fract().is_zero()) else {
        return Validation::invalid(FieldError::NotAnInteger {
            field: DAY_OF_MONTH,
        });
    };

    match value.to_u8() {
        Some(day) if (MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).contains(&day) => {
            Validation::Valid(Some(day))
        }
        _ => Validation::invalid(FieldError::OutOfRange {
            field: DAY_OF_MONTH,
            min: Decimal::from(MIN_DAY_OF_MONTH),
            max: Decimal::from(MAX_DAY_OF_MONTH),
        }),
    }
}
