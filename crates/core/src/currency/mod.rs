//! Conversion of amounts into an entry's base currency.
//!
//! Rates themselves come from outside (a rate feed, a user, a config file);
//! this module only applies them.

pub mod conversion;
pub mod error;
pub mod exchange;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, convert_between};
pub use error::ConversionError;
pub use exchange::{ExchangeRates, RateSource};
