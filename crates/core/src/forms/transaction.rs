//! Income and expense submissions.

use chrono::NaiveDate;
use pocketbook_shared::types::{Currency, EntryId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{FormErrors, PostingError};
use super::rules::SubmissionRules;
use crate::currency::{convert_between, RateSource};
use crate::ledger::{Entry, EntryLine};
use crate::validation::{
    sanitize_description, validate_amount, validate_currency_in, validate_date_on, FieldError,
    RawInput, Validation,
};

/// Ledger account every income is paid into and every expense is paid from.
pub const CASH_ACCOUNT: &str = "assets:cash";

/// Category used when the form leaves it blank.
const DEFAULT_CATEGORY: &str = "uncategorized";

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// Prefix of the ledger account the category maps to.
    #[must_use]
    pub const fn category_prefix(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expenses",
        }
    }
}

/// An income or expense form as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionSubmission {
    /// Income or expense.
    pub kind: TransactionKind,
    /// Short description.
    #[serde(default)]
    pub description: RawInput,
    /// Amount in `currency`.
    #[serde(default)]
    pub amount: RawInput,
    /// Currency code.
    #[serde(default)]
    pub currency: RawInput,
    /// `YYYY-MM-DD` date.
    #[serde(default)]
    pub date: RawInput,
    /// Free-text category, e.g. "Groceries".
    #[serde(default)]
    pub category: RawInput,
}

/// An accepted income or expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Identifier assigned on acceptance.
    pub id: TransactionId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Sanitized description (at most 30 characters).
    pub description: String,
    /// Amount rounded to cents.
    pub amount: Decimal,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Transaction date.
    pub date: NaiveDate,
    /// Lower-case, dash-separated category.
    pub category: String,
}

impl TransactionSubmission {
    /// Validates every field and returns the accepted transaction.
    pub fn validate(&self, rules: &SubmissionRules) -> Result<Transaction, FormErrors> {
        let mut errors = FormErrors::default();

        let description =
            errors.check("description", validate_description(self.description.as_text()));
        let amount = errors.check("amount", validate_amount(&self.amount));
        let currency = errors.check(
            "currency",
            validate_currency_in(
                self.currency.as_text().unwrap_or_default(),
                &rules.allowed_currencies,
            ),
        );
        let date = errors.check(
            "date",
            validate_date_on(self.date.as_text().unwrap_or_default(), rules.today),
        );

        match (description, amount, currency, date) {
            (Some(description), Some(amount), Some(currency), Some(date)) => Ok(Transaction {
                id: TransactionId::new(),
                kind: self.kind,
                description,
                amount,
                currency,
                date,
                category: category_slug(self.category.as_text()),
            }),
            _ => {
                debug!(kind = ?self.kind, errors = errors.len(), "Rejected transaction submission");
                Err(errors)
            }
        }
    }
}

impl Transaction {
    /// Builds the two-line ledger entry for this transaction in `base`.
    ///
    /// Income debits cash and credits `income:<category>`; an expense debits
    /// `expenses:<category>` and credits cash. The entry is checked with the
    /// balance validator before it is returned.
    pub fn post(&self, base: Currency, rates: &impl RateSource) -> Result<Entry, PostingError> {
        let base_amount = convert_between(self.amount, self.currency, base, rates)?;

        let category_account = format!("{}:{}", self.kind.category_prefix(), self.category);
        let (debit, credit) = match self.kind {
            TransactionKind::Income => (CASH_ACCOUNT.to_string(), category_account),
            TransactionKind::Expense => (category_account, CASH_ACCOUNT.to_string()),
        };

        let entry = Entry {
            id: EntryId::new(),
            date: self.date,
            description: self.description.clone(),
            base_currency: base,
            lines: vec![
                EntryLine::debit(debit, base_amount, base),
                EntryLine::credit(credit, base_amount, base),
            ],
        };
        entry.validate()?;

        debug!(transaction_id = %self.id, entry_id = %entry.id, %base_amount, "Posted transaction");
        Ok(entry)
    }
}

fn validate_description(input: Option<&str>) -> Validation<String> {
    let description = sanitize_description(input);
    if description.is_empty() {
        return Validation::invalid(FieldError::Required {
            field: "Description",
        });
    }
    Validation::Valid(description)
}

/// Turns a free-text category into an account-name segment.
fn category_slug(input: Option<&str>) -> String {
    let cleaned = sanitize_description(input).to_lowercase();
    let slug = cleaned
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        slug
    }
}
