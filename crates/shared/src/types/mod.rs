//! Common types used across the application.

pub mod account_type;
pub mod currency;
pub mod id;

pub use account_type::AccountType;
pub use currency::{Currency, CurrencyWhitelist};
pub use id::*;
