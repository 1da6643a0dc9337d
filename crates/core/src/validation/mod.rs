//! Input sanitization and field validation.
//!
//! Every function here is pure and never panics on bad input. Scalar
//! validators return a [`Validation`]: either the normalized value or a
//! [`FieldError`] (plus a fallback value for fields that have one). Plain-text
//! sanitizers return the cleaned string directly.
//!
//! - `sanitize` - Denylist text cleaning behind the [`TextSanitizer`] trait
//! - `amount` - Money amounts and signed balances
//! - `date` - `YYYY-MM-DD` dates within a sane window around today
//! - `fields` - Whitelisted codes, account names, percentages, day of month

pub mod amount;
pub mod date;
pub mod fields;
pub mod input;
pub mod limits;
pub mod result;
pub mod sanitize;

#[cfg(test)]
mod amount_props;
#[cfg(test)]
mod sanitize_props;

pub use amount::{validate_amount, validate_balance};
pub use date::{validate_date, validate_date_on};
pub use fields::{
    validate_account_name, validate_account_type, validate_currency, validate_currency_in,
    validate_day_of_month, validate_percentage,
};
pub use input::RawInput;
pub use result::{FieldError, Validation};
pub use sanitize::{sanitize_description, sanitize_text, DenylistSanitizer, TextSanitizer};
