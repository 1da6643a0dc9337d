//! Property-based tests for currency conversion.

use pocketbook_shared::types::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert_amount, convert_between};
use super::exchange::ExchangeRates;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion never yields more decimal places than requested.
    #[test]
    fn prop_convert_respects_decimal_places(
        amount in positive_amount(),
        rate in positive_rate(),
        places in 0u32..=8,
    ) {
        let result = convert_amount(amount, rate, places).unwrap();
        prop_assert!(result.scale() <= places);
    }

    /// Rounding error is at most half a unit in the last place.
    #[test]
    fn prop_convert_error_bounded(amount in positive_amount(), rate in positive_rate()) {
        let exact = amount * rate;
        let rounded = convert_amount(amount, rate, 2).unwrap();
        prop_assert!((exact - rounded).abs() <= Decimal::new(5, 3));
    }

    /// Positive amounts stay non-negative after conversion.
    #[test]
    fn prop_convert_between_keeps_sign(
        amount in positive_amount(),
        quote in positive_rate(),
        from in currency(),
    ) {
        let rates = ExchangeRates::new(Currency::Usd).with_quote(from, quote);
        let converted = convert_between(amount, from, Currency::Usd, &rates).unwrap();
        prop_assert!(converted >= Decimal::ZERO);
        prop_assert!(converted.scale() <= Currency::Usd.decimal_places());
    }
}
