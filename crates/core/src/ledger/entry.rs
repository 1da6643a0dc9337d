//! Ledger entry domain types.

use chrono::NaiveDate;
use pocketbook_shared::types::{Currency, EntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::validation::validate_balanced;

/// Side of a ledger line.
///
/// Amounts are signed: debit lines carry a positive base amount and credit
/// lines a negative one, so a balanced entry sums to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Debit (positive base amount).
    Debit,
    /// Credit (negative base amount).
    Credit,
}

impl Direction {
    /// Sign a line in this direction must carry, as a word.
    #[must_use]
    pub const fn required_sign(self) -> &'static str {
        match self {
            Self::Debit => "positive",
            Self::Credit => "negative",
        }
    }

    /// Returns true if `amount` has the sign this direction requires.
    /// Zero has neither sign.
    #[must_use]
    pub fn accepts(self, amount: Decimal) -> bool {
        match self {
            Self::Debit => amount > Decimal::ZERO,
            Self::Credit => amount < Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => f.write_str("debit"),
            Self::Credit => f.write_str("credit"),
        }
    }
}

/// One leg of a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLine {
    /// Identifier of the line, unique within its entry.
    pub id: String,
    /// Debit or credit.
    pub direction: Direction,
    /// Signed amount in the entry's base currency.
    pub base_amount: Decimal,
    /// Code of the currency `base_amount` is expressed in.
    pub base_currency: String,
}

impl EntryLine {
    /// Creates a line with an explicitly signed amount.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        direction: Direction,
        base_amount: Decimal,
        base_currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            direction,
            base_amount,
            base_currency: base_currency.into(),
        }
    }

    /// Creates a debit line of `magnitude`.
    #[must_use]
    pub fn debit(id: impl Into<String>, magnitude: Decimal, currency: Currency) -> Self {
        Self::new(id, Direction::Debit, magnitude.abs(), currency.code())
    }

    /// Creates a credit line of `magnitude`; the stored amount is negative.
    #[must_use]
    pub fn credit(id: impl Into<String>, magnitude: Decimal, currency: Currency) -> Self {
        Self::new(id, Direction::Credit, -magnitude.abs(), currency.code())
    }
}

/// A logical ledger entry built by a caller just before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry identifier.
    pub id: EntryId,
    /// Date the entry is booked on.
    pub date: NaiveDate,
    /// Short description shown alongside the entry.
    pub description: String,
    /// Currency every line is expressed in.
    pub base_currency: Currency,
    /// The legs of the entry.
    pub lines: Vec<EntryLine>,
}

impl Entry {
    /// Checks the entry with [`validate_balanced`].
    pub fn validate(&self) -> Result<(), LedgerError> {
        validate_balanced(&self.id.to_string(), &self.lines, self.base_currency.code())
    }

    /// Sum of all debit lines.
    #[must_use]
    pub fn total_debits(&self) -> Decimal {
        self.lines
            .iter()
            .filter(|line| line.direction == Direction::Debit)
            .map(|line| line.base_amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_direction_signs() {
        assert!(Direction::Debit.accepts(dec!(0.01)));
        assert!(!Direction::Debit.accepts(Decimal::ZERO));
        assert!(!Direction::Debit.accepts(dec!(-1)));
        assert!(Direction::Credit.accepts(dec!(-0.01)));
        assert!(!Direction::Credit.accepts(Decimal::ZERO));
        assert!(!Direction::Credit.accepts(dec!(1)));
    }

    #[test]
    fn test_line_constructors_apply_sign() {
        let debit = EntryLine::debit("d", dec!(-25), Currency::Usd);
        assert_eq!(debit.base_amount, dec!(25));
        assert_eq!(debit.base_currency, "USD");

        let credit = EntryLine::credit("c", dec!(25), Currency::Eur);
        assert_eq!(credit.base_amount, dec!(-25));
        assert_eq!(credit.direction, Direction::Credit);
    }

    #[test]
    fn test_entry_validate_and_totals() {
        let entry = Entry {
            id: EntryId::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: "Groceries".to_string(),
            base_currency: Currency::Usd,
            lines: vec![
                EntryLine::debit("expense", dec!(40), Currency::Usd),
                EntryLine::debit("tip", dec!(2), Currency::Usd),
                EntryLine::credit("cash", dec!(42), Currency::Usd),
            ],
        };
        assert!(entry.validate().is_ok());
        assert_eq!(entry.total_debits(), dec!(42));
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(serde_json::to_string(&Direction::Credit).unwrap(), "\"credit\"");
    }
}
