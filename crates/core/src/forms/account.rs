//! Asset and liability account submissions.

use pocketbook_shared::types::{AccountId, AccountType, Currency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::FormErrors;
use super::rules::SubmissionRules;
use crate::validation::{
    validate_account_name, validate_account_type, validate_balance, validate_currency_in,
    validate_day_of_month, validate_percentage, RawInput,
};

/// An account form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountSubmission {
    /// Display name.
    pub name: RawInput,
    /// Account type tag, e.g. `"credit_card"`.
    #[serde(rename = "type")]
    pub account_type: RawInput,
    /// Current balance; negative for debts.
    pub balance: RawInput,
    /// Currency code.
    pub currency: RawInput,
    /// Optional yearly interest rate, in percent.
    pub interest_rate: RawInput,
    /// Optional payment due day.
    pub due_day: RawInput,
}

/// An accepted account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Identifier assigned on acceptance.
    pub id: AccountId,
    /// Sanitized display name.
    pub name: String,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Balance rounded to cents.
    pub balance: Decimal,
    /// Currency of `balance`.
    pub currency: Currency,
    /// Yearly interest rate, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    /// Payment due day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u8>,
}

impl Account {
    /// Returns true for credit cards, loans and mortgages.
    #[must_use]
    pub fn is_liability(&self) -> bool {
        self.account_type.is_liability()
    }
}

impl AccountSubmission {
    /// Validates every field and returns the accepted account.
    pub fn validate(&self, rules: &SubmissionRules) -> Result<Account, FormErrors> {
        let mut errors = FormErrors::default();

        let name = errors.check("name", validate_account_name(self.name.as_text()));
        let account_type = errors.check(
            "type",
            validate_account_type(self.account_type.as_text().unwrap_or_default()),
        );
        let balance = errors.check("balance", validate_balance(&self.balance));
        let currency = errors.check(
            "currency",
            validate_currency_in(
                self.currency.as_text().unwrap_or_default(),
                &rules.allowed_currencies,
            ),
        );
        let interest_rate = errors.check("interest_rate", validate_percentage(&self.interest_rate));
        let due_day = errors.check("due_day", validate_day_of_month(&self.due_day));

        match (name, account_type, balance, currency, interest_rate, due_day) {
            (
                Some(name),
                Some(account_type),
                Some(balance),
                Some(currency),
                Some(interest_rate),
                Some(due_day),
            ) => Ok(Account {
                id: AccountId::new(),
                name,
                account_type,
                balance,
                currency,
                interest_rate,
                due_day,
            }),
            _ => {
                debug!(errors = errors.len(), "Rejected account submission");
                Err(errors)
            }
        }
    }
}
