//! The outcome type shared by every field validator.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a single field was rejected.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// No value was supplied.
    #[error("{field} is required")]
    Required {
        /// Human-readable field name.
        field: &'static str,
    },

    /// The value could not be read as a number.
    #[error("{field} must be a valid number")]
    NotANumber {
        /// Human-readable field name.
        field: &'static str,
    },

    /// The value is below the minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum {
        /// Human-readable field name.
        field: &'static str,
        /// Smallest accepted value.
        min: Decimal,
    },

    /// The value (or its magnitude) is above the maximum.
    #[error("{field} cannot exceed {max}")]
    AboveMaximum {
        /// Human-readable field name.
        field: &'static str,
        /// Largest accepted value.
        max: Decimal,
    },

    /// The value lies outside an inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Human-readable field name.
        field: &'static str,
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },

    /// The value has a fractional part where a whole number is needed.
    #[error("{field} must be a whole number")]
    NotAnInteger {
        /// Human-readable field name.
        field: &'static str,
    },

    /// The text does not have the expected shape.
    #[error("{field} must use the {expected} format")]
    InvalidFormat {
        /// Human-readable field name.
        field: &'static str,
        /// Description of the expected format.
        expected: &'static str,
    },

    /// The text has the right shape but names no real calendar date.
    #[error("{field} is not a valid calendar date")]
    InvalidDate {
        /// Human-readable field name.
        field: &'static str,
    },

    /// The date lies too far ahead.
    #[error("{field} cannot be more than {years} years in the future")]
    TooFarInFuture {
        /// Human-readable field name.
        field: &'static str,
        /// Allowed distance in years.
        years: u32,
    },

    /// The date lies too far back.
    #[error("{field} cannot be more than {years} years in the past")]
    TooFarInPast {
        /// Human-readable field name.
        field: &'static str,
        /// Allowed distance in years.
        years: u32,
    },

    /// The value is not on the whitelist.
    #[error("{field} is not supported")]
    NotAllowed {
        /// Human-readable field name.
        field: &'static str,
    },
}

impl FieldError {
    /// Returns the human-readable name of the rejected field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::NotANumber { field }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotAnInteger { field }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidDate { field }
            | Self::TooFarInFuture { field, .. }
            | Self::TooFarInPast { field, .. }
            | Self::NotAllowed { field } => field,
        }
    }
}

/// Result of validating one field.
///
/// Rejection is an ordinary outcome, not a failure of the caller. Some
/// fields still produce a usable value when rejected (currency falls back to
/// USD, account type to `other`); that value is carried in `fallback`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Validation<T> {
    /// The input was accepted and normalized.
    Valid(T),
    /// The input was rejected.
    Invalid {
        /// Value to use in place of the rejected input, if the field has one.
        fallback: Option<T>,
        /// Why the input was rejected.
        error: FieldError,
    },
}

impl<T> Validation<T> {
    /// Rejection with no fallback value.
    pub const fn invalid(error: FieldError) -> Self {
        Self::Invalid {
            fallback: None,
            error,
        }
    }

    /// Rejection that still yields `fallback`.
    pub const fn invalid_with(fallback: T, error: FieldError) -> Self {
        Self::Invalid {
            fallback: Some(fallback),
            error,
        }
    }

    /// Returns true if the input was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The accepted value, or the fallback when rejected.
    #[must_use]
    pub fn sanitized_value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid { fallback, .. } => fallback.as_ref(),
        }
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid { error, .. } => Some(error),
        }
    }

    /// Converts into a `Result`, dropping any fallback.
    pub fn into_result(self) -> Result<T, FieldError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid { error, .. } => Err(error),
        }
    }

    /// Maps the accepted value and the fallback alike.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Validation<U> {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid { fallback, error } => Validation::Invalid {
                fallback: fallback.map(f),
                error,
            },
        }
    }
}
