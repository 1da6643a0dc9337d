//! Property-based tests for the balanced-entry validator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::{Direction, EntryLine};
use super::error::LedgerError;
use super::validation::validate_balanced;

/// Strategy to generate a positive amount from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a balanced set of sign-correct USD lines.
///
/// Debits are random; the same total is then split across 1-3 credits.
fn balanced_lines() -> impl Strategy<Value = Vec<EntryLine>> {
    (
        prop::collection::vec(positive_amount(), 1..5),
        prop::collection::vec(1u32..100, 1..4),
    )
        .prop_map(|(debits, weights)| {
            let total: Decimal = debits.iter().copied().sum();
            let weight_sum: u32 = weights.iter().sum();

            let mut lines: Vec<EntryLine> = debits
                .iter()
                .enumerate()
                .map(|(i, amount)| EntryLine::new(format!("d{i}"), Direction::Debit, *amount, "USD"))
                .collect();

            let mut remaining = total;
            for (i, weight) in weights.iter().enumerate() {
                let share = if i + 1 == weights.len() {
                    remaining
                } else {
                    (total * Decimal::from(*weight) / Decimal::from(weight_sum)).round_dp(2)
                };
                remaining -= share;
                lines.push(EntryLine::new(format!("c{i}"), Direction::Credit, -share, "USD"));
            }
            lines
        })
        .prop_filter("every credit share must be non-zero", |lines| {
            lines.iter().all(|line| line.direction.accepts(line.base_amount))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Sign-correct lines that sum to zero always pass.
    #[test]
    fn prop_balanced_entry_accepted(lines in balanced_lines()) {
        let result = validate_balanced("entry", &lines, "USD");
        prop_assert!(result.is_ok(), "Balanced entry should pass, got: {:?}", result);
    }

    /// Base currency comparison ignores the case of the declared base currency.
    #[test]
    fn prop_base_currency_case_insensitive(lines in balanced_lines()) {
        prop_assert!(validate_balanced("entry", &lines, "usd").is_ok());
        prop_assert!(validate_balanced("entry", &lines, "Usd").is_ok());
    }

    /// The first line in a foreign currency is reported, whatever comes after it.
    #[test]
    fn prop_currency_mismatch_reported_first(
        lines in balanced_lines(),
        index in any::<prop::sample::Index>(),
        extra in positive_amount(),
    ) {
        let mut lines = lines;
        let bad = index.index(lines.len());
        lines[bad].base_currency = "EUR".to_string();
        // Later lines with a wrong sign and an unbalanced total must not mask it.
        lines.push(EntryLine::new("late", Direction::Credit, extra, "USD"));

        let expected_id = lines[bad].id.clone();
        match validate_balanced("entry", &lines, "USD") {
            Err(LedgerError::BaseCurrencyMismatch { line_id, expected, actual, .. }) => {
                prop_assert_eq!(line_id, expected_id);
                prop_assert_eq!(expected, "USD");
                prop_assert_eq!(actual, "EUR");
            }
            other => prop_assert!(false, "Expected currency mismatch, got: {:?}", other),
        }
    }

    /// Flipping the sign of one line is reported as a direction violation on that line.
    #[test]
    fn prop_flipped_sign_rejected(lines in balanced_lines(), index in any::<prop::sample::Index>()) {
        let mut lines = lines;
        let bad = index.index(lines.len());
        lines[bad].base_amount = -lines[bad].base_amount;

        let expected_id = lines[bad].id.clone();
        match validate_balanced("entry", &lines, "USD") {
            Err(LedgerError::DirectionViolation { line_id, .. }) => {
                prop_assert_eq!(line_id, expected_id);
            }
            other => prop_assert!(false, "Expected direction violation, got: {:?}", other),
        }
    }

    /// Adding an extra debit breaks the balance by exactly that amount.
    #[test]
    fn prop_extra_debit_unbalances(lines in balanced_lines(), extra in positive_amount()) {
        let mut lines = lines;
        lines.push(EntryLine::new("extra", Direction::Debit, extra, "USD"));

        prop_assert_eq!(
            validate_balanced("entry", &lines, "USD"),
            Err(LedgerError::UnbalancedEntry { entry_id: "entry".to_string(), sum: extra })
        );
    }

    /// Validation has no side effects: repeated calls agree.
    #[test]
    fn prop_validation_repeatable(lines in balanced_lines(), extra in positive_amount()) {
        let mut lines = lines;
        lines.push(EntryLine::new("extra", Direction::Debit, extra, "USD"));
        prop_assert_eq!(
            validate_balanced("entry", &lines, "USD"),
            validate_balanced("entry", &lines, "USD")
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Specific example: mismatch on the second line of three.
    #[test]
    fn test_mismatch_on_second_line() {
        let lines = vec![
            EntryLine::new("a", Direction::Debit, dec!(50), "MXN"),
            EntryLine::new("b", Direction::Debit, dec!(50), "USD"),
            EntryLine::new("c", Direction::Credit, dec!(-100), "MXN"),
        ];
        assert!(matches!(
            validate_balanced("entry", &lines, "mxn"),
            Err(LedgerError::BaseCurrencyMismatch { ref line_id, .. }) if line_id == "b"
        ));
    }
}
