//! Property-based tests for amount and balance validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::amount::{validate_amount, validate_balance};
use super::input::RawInput;
use super::limits::MAX_AMOUNT;

/// Amounts in cents from 0.01 to 1,000,000,000.00.
fn valid_cents() -> impl Strategy<Value = i64> {
    1i64..=100_000_000_000i64
}

/// Renders cents the way a user might type them: `$1,234.56`.
fn format_with_symbols(cents: i64) -> String {
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}.{:02}", cents % 100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every amount within bounds is accepted unchanged.
    #[test]
    fn prop_in_range_amount_accepted(cents in valid_cents()) {
        let amount = Decimal::new(cents, 2);
        let result = validate_amount(&RawInput::from(amount));
        prop_assert!(result.is_valid());
        prop_assert_eq!(result.sanitized_value(), Some(&amount));
    }

    /// Formatting symbols are stripped before parsing.
    #[test]
    fn prop_formatted_string_round_trips(cents in valid_cents()) {
        let text = format_with_symbols(cents);
        let result = validate_amount(&RawInput::from(text.as_str()));
        prop_assert_eq!(result.sanitized_value(), Some(&Decimal::new(cents, 2)), "input {}", text);
    }

    /// Accepted amounts never carry more than 2 decimal places.
    #[test]
    fn prop_amount_rounded_to_cents(mills in 10i64..1_000_000_000i64) {
        let result = validate_amount(&RawInput::from(Decimal::new(mills, 3)));
        let value = *result.sanitized_value().unwrap();
        prop_assert_eq!(value, value.round_dp(2));
    }

    /// Balances accept either sign within the magnitude bound.
    #[test]
    fn prop_balance_sign_symmetric(cents in valid_cents()) {
        let positive = validate_balance(&RawInput::from(Decimal::new(cents, 2)));
        let negative = validate_balance(&RawInput::from(Decimal::new(-cents, 2)));
        prop_assert!(positive.is_valid());
        prop_assert!(negative.is_valid());
        prop_assert_eq!(
            positive.sanitized_value().copied().map(|v| -v),
            negative.sanitized_value().copied()
        );
    }

    /// Anything above the maximum is rejected.
    #[test]
    fn prop_above_max_rejected(extra_cents in 1i64..1_000_000i64) {
        let amount = MAX_AMOUNT + Decimal::new(extra_cents, 2);
        prop_assert!(!validate_amount(&RawInput::from(amount)).is_valid());
        prop_assert!(!validate_balance(&RawInput::from(-amount)).is_valid());
    }
}

#[test]
fn test_format_with_symbols() {
    assert_eq!(format_with_symbols(123_456), "$1,234.56");
    assert_eq!(format_with_symbols(1), "$0.01");
    assert_eq!(format_with_symbols(100_000_000_000), "$1,000,000,000.00");
}
