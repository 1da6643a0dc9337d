//! Bounds applied by the field validators.

use rust_decimal::Decimal;

/// Smallest accepted transaction amount (0.01).
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted amount, and largest absolute balance (1,000,000,000).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Decimal places amounts, balances and percentages are rounded to.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Maximum length of free text, in characters.
pub const MAX_TEXT_CHARS: usize = 1000;

/// Maximum length of a transaction description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 30;

/// Maximum length of an account name, in characters.
pub const MAX_ACCOUNT_NAME_CHARS: usize = 100;

/// How far into the future a date may lie.
pub const MAX_FUTURE_YEARS: u32 = 10;

/// How far into the past a date may lie.
pub const MAX_PAST_YEARS: u32 = 100;

/// Inclusive percentage bounds.
pub const MIN_PERCENTAGE: Decimal = Decimal::ZERO;
/// Inclusive percentage bounds.
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Inclusive day-of-month bounds.
pub const MIN_DAY_OF_MONTH: u8 = 1;
/// Inclusive day-of-month bounds.
pub const MAX_DAY_OF_MONTH: u8 = 31;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_constants() {
        assert_eq!(MIN_AMOUNT, dec!(0.01));
        assert_eq!(MAX_AMOUNT, dec!(1000000000));
        assert_eq!(MAX_PERCENTAGE, dec!(100));
    }
}
