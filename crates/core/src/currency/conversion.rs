//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round to the target currency's decimal places
//! - Use banker's rounding (round half to even)

use pocketbook_shared::types::Currency;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::ConversionError;
use super::exchange::RateSource;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
/// Returns `None` when the product does not fit in a `Decimal`.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Option<Decimal> {
    let converted = amount.checked_mul(rate)?;
    Some(converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven))
}

/// Converts `amount` from one currency to another with rates from `rates`.
///
/// The result is rounded to the target currency's decimal places.
pub fn convert_between(
    amount: Decimal,
    from: Currency,
    to: Currency,
    rates: &impl RateSource,
) -> Result<Decimal, ConversionError> {
    if from == to {
        return Ok(amount);
    }
    let rate = rates
        .rate(from, to)
        .ok_or(ConversionError::NoExchangeRate { from, to })?;
    if rate <= Decimal::ZERO {
        return Err(ConversionError::InvalidExchangeRate { from, to, rate });
    }
    convert_amount(amount, rate, to.decimal_places())
        .ok_or(ConversionError::ConversionOverflow { from, to })
}
