//! Untrusted values as they arrive from a form.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;

/// A raw form value: text, a number, or nothing at all.
///
/// Deserializes untagged from JSON, so `"12.50"`, `12.5` and `null` map to
/// `Text`, `Number` and `Missing`. Absent struct fields default to `Missing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// Text typed by the user.
    Text(String),
    /// A numeric value from a number input.
    Number(Decimal),
    /// A number input that held no number (NaN, infinity).
    #[serde(skip)]
    NotANumber,
    /// No value supplied.
    #[default]
    Missing,
}

impl RawInput {
    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if no value was supplied.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for RawInput {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        Decimal::from_f64(value).map_or(Self::NotANumber, Self::Number)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
