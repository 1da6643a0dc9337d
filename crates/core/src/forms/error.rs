//! Form and posting errors.

use std::fmt;

use thiserror::Error;

use crate::currency::ConversionError;
use crate::ledger::LedgerError;
use crate::validation::{FieldError, Validation};

/// A field error tagged with the form key it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldError {
    /// Form key, e.g. `"amount"`.
    pub field: &'static str,
    /// What was wrong with it.
    pub error: FieldError,
}

impl fmt::Display for FormFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Every field error found in one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FormFieldError>,
}

impl FormErrors {
    /// Runs one field result through the collector.
    ///
    /// Returns the value when valid; otherwise records the error under
    /// `field` and returns `None`.
    pub fn check<T>(&mut self, field: &'static str, result: Validation<T>) -> Option<T> {
        match result.into_result() {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(FormFieldError { field, error });
                None
            }
        }
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Recorded errors, in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FormFieldError> {
        self.errors.iter()
    }

    /// The error recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| &entry.error)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid field(s)", self.errors.len())?;
        for (i, entry) in self.errors.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Failure to turn an accepted transaction into a balanced entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostingError {
    /// The amount could not be converted into the base currency.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The built entry failed the balance check.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl PostingError {
    /// Returns the error code for machine-readable reports.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Conversion(err) => err.error_code(),
            Self::Ledger(err) => err.error_code(),
        }
    }
}
