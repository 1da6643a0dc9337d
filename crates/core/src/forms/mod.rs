//! Form submissions for income, expenses, and asset/liability accounts.
//!
//! A submission holds raw values exactly as the form sent them. Validation
//! runs every field validator and reports all failures together, so the user
//! can fix the whole form at once. Accepted transactions can then be posted
//! as a balanced ledger entry.

pub mod account;
pub mod error;
pub mod rules;
pub mod transaction;

pub use account::{Account, AccountSubmission};
pub use error::{FormErrors, FormFieldError, PostingError};
pub use rules::SubmissionRules;
pub use transaction::{Transaction, TransactionKind, TransactionSubmission, CASH_ACCOUNT};
