//! The balanced-entry validator.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::entry::EntryLine;
use super::error::LedgerError;

/// Largest absolute line sum still treated as zero (0.000001).
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Checks that `lines` form a balanced double-entry in `base_currency`.
///
/// `base_currency` is upper-cased once; line currencies are compared to it
/// as given. Lines are checked in order and the first violation is returned:
/// for each line, currency first, then the debit/credit sign. Only when every
/// line passes is the sum compared against [`BALANCE_TOLERANCE`].
///
/// An entry with no lines sums to zero and passes.
///
/// # Errors
///
/// - [`LedgerError::BaseCurrencyMismatch`] if a line is in another currency
/// - [`LedgerError::DirectionViolation`] if a debit is not positive or a credit not negative
/// - [`LedgerError::UnbalancedEntry`] if the amounts do not net to zero
/// - [`LedgerError::SumOverflow`] if the running sum leaves the `Decimal` range
pub fn validate_balanced(
    entry_id: &str,
    lines: &[EntryLine],
    base_currency: &str,
) -> Result<(), LedgerError> {
    let result = check_lines(entry_id, lines, base_currency);
    match &result {
        Ok(()) => debug!(entry_id, lines = lines.len(), "Entry balanced"),
        Err(err) => warn!(entry_id, error_code = err.error_code(), "{err}"),
    }
    result
}

fn check_lines(entry_id: &str, lines: &[EntryLine], base_currency: &str) -> Result<(), LedgerError> {
    let expected = base_currency.to_uppercase();
    // `None` once the running sum has overflowed.
    let mut sum = Some(Decimal::ZERO);

    for line in lines {
        if line.base_currency != expected {
            return Err(LedgerError::BaseCurrencyMismatch {
                entry_id: entry_id.to_string(),
                line_id: line.id.clone(),
                expected,
                actual: line.base_currency.clone(),
            });
        }

        if !line.direction.accepts(line.base_amount) {
            return Err(LedgerError::DirectionViolation {
                entry_id: entry_id.to_string(),
                line_id: line.id.clone(),
                direction: line.direction,
                amount: line.base_amount,
            });
        }

        sum = sum.and_then(|total| total.checked_add(line.base_amount));
    }

    let Some(sum) = sum else {
        return Err(LedgerError::SumOverflow {
            entry_id: entry_id.to_string(),
        });
    };
    if sum.abs() > BALANCE_TOLERANCE {
        return Err(LedgerError::UnbalancedEntry {
            entry_id: entry_id.to_string(),
            sum,
        });
    }

    Ok(())
}
