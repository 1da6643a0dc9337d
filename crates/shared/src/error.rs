//! Application-wide error types.
//!
//! Library crates report failures with their own `thiserror` enums. Callers
//! that need a single type (the command-line checker, future front ends) fold
//! them into [`AppError`], which sorts failures into the recoverable and
//! non-recoverable buckets.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// User input failed field validation. The user can correct and resubmit.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A constructed ledger entry violated a bookkeeping invariant.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true if the user can fix the problem by changing their input.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the error code for machine-readable reports.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::DataIntegrity(_) => "DATA_INTEGRITY_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
