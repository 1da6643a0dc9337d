//! Batch checking and the JSON report.

use pocketbook_core::currency::ExchangeRates;
use pocketbook_core::forms::{
    Account, AccountSubmission, FormErrors, PostingError, SubmissionRules, Transaction,
    TransactionSubmission,
};
use pocketbook_core::ledger::Entry;
use pocketbook_shared::AppError;
use pocketbook_shared::types::Currency;
use serde::{Deserialize, Serialize};

/// Input document.
#[derive(Debug, Deserialize)]
pub struct Batch {
    /// Base currency for posted entries.
    #[serde(default)]
    pub base_currency: Option<Currency>,
    /// Exchange rates; without them only base-currency amounts can be posted.
    #[serde(default)]
    pub rates: Option<ExchangeRates>,
    #[serde(default)]
    pub transactions: Vec<TransactionSubmission>,
    #[serde(default)]
    pub accounts: Vec<AccountSubmission>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub base_currency: Currency,
    pub transactions: Vec<TransactionOutcome>,
    pub accounts: Vec<AccountOutcome>,
    pub summary: Summary,
}

/// What happened to one transaction submission.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransactionOutcome {
    /// Valid and posted as a balanced entry.
    Posted {
        transaction: Transaction,
        entry: Entry,
    },
    /// One or more fields were invalid.
    Rejected { errors: Vec<FieldReport> },
    /// Valid, but the entry could not be built.
    Unposted {
        transaction: Transaction,
        error: ErrorReport,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AccountOutcome {
    Accepted { account: Account },
    Rejected { errors: Vec<FieldReport> },
}

#[derive(Debug, Serialize)]
pub struct FieldReport {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    /// `AppError` bucket the failure falls into.
    pub category: &'static str,
    pub recoverable: bool,
    pub message: String,
}

/// Outcome counts.
#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub posted: usize,
    pub unposted: usize,
    pub rejected_transactions: usize,
    pub accepted_accounts: usize,
    pub rejected_accounts: usize,
}

impl Summary {
    /// Submissions that did not make it all the way through.
    pub fn failed(&self) -> usize {
        self.unposted + self.rejected_transactions + self.rejected_accounts
    }
}

/// Validates every submission in `batch` and posts the valid transactions in `base`.
pub fn check_batch(batch: &Batch, base: Currency, rules: &SubmissionRules) -> Report {
    let rates = batch
        .rates
        .clone()
        .unwrap_or_else(|| ExchangeRates::new(base));
    let mut summary = Summary::default();

    let transactions = batch
        .transactions
        .iter()
        .map(|submission| {
            let outcome = check_transaction(submission, base, &rates, rules);
            match outcome {
                TransactionOutcome::Posted { .. } => summary.posted += 1,
                TransactionOutcome::Unposted { .. } => summary.unposted += 1,
                TransactionOutcome::Rejected { .. } => summary.rejected_transactions += 1,
            }
            outcome
        })
        .collect();

    let accounts = batch
        .accounts
        .iter()
        .map(|submission| match submission.validate(rules) {
            Ok(account) => {
                summary.accepted_accounts += 1;
                AccountOutcome::Accepted { account }
            }
            Err(errors) => {
                summary.rejected_accounts += 1;
                AccountOutcome::Rejected {
                    errors: field_reports(&errors),
                }
            }
        })
        .collect();

    Report {
        base_currency: base,
        transactions,
        accounts,
        summary,
    }
}

fn check_transaction(
    submission: &TransactionSubmission,
    base: Currency,
    rates: &ExchangeRates,
    rules: &SubmissionRules,
) -> TransactionOutcome {
    let transaction = match submission.validate(rules) {
        Ok(transaction) => transaction,
        Err(errors) => {
            return TransactionOutcome::Rejected {
                errors: field_reports(&errors),
            };
        }
    };

    match transaction.post(base, rates) {
        Ok(entry) => TransactionOutcome::Posted { transaction, entry },
        Err(err) => TransactionOutcome::Unposted {
            transaction,
            error: error_report(&err),
        },
    }
}

fn field_reports(errors: &FormErrors) -> Vec<FieldReport> {
    errors
        .iter()
        .map(|entry| FieldReport {
            field: entry.field,
            message: entry.error.to_string(),
        })
        .collect()
}

fn error_report(err: &PostingError) -> ErrorReport {
    let app_error = AppError::from(err.clone());
    ErrorReport {
        code: err.error_code(),
        category: app_error.error_code(),
        recoverable: app_error.is_recoverable(),
        message: err.to_string(),
    }
}
