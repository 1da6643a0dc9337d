//! Conversions from core errors into [`AppError`].

use pocketbook_shared::AppError;

use crate::currency::ConversionError;
use crate::forms::{FormErrors, PostingError};
use crate::ledger::LedgerError;

impl From<FormErrors> for AppError {
    fn from(err: FormErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::DataIntegrity(err.to_string())
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            // The user can pick another currency or supply the rate.
            ConversionError::NoExchangeRate { .. } => Self::Validation(err.to_string()),
            ConversionError::InvalidExchangeRate { .. }
            | ConversionError::ConversionOverflow { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<PostingError> for AppError {
    fn from(err: PostingError) -> Self {
        match err {
            PostingError::Conversion(err) => err.into(),
            PostingError::Ledger(err) => err.into(),
        }
    }
}
