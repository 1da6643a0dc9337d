//! Core logic for Pocketbook.
//!
//! Everything here is pure: no I/O, no clock reads outside of
//! [`forms::SubmissionRules::from_config`] and [`validation::validate_date`].
//!
//! # Modules
//!
//! - `validation` - Field validators and text sanitization
//! - `ledger` - Balance and direction checks for double-entry entries
//! - `currency` - Exchange rates and conversion into a base currency
//! - `forms` - Whole-form validation for transactions and accounts
//! - `error` - Mapping into the application error type

pub mod currency;
pub mod error;
pub mod forms;
pub mod ledger;
pub mod validation;
