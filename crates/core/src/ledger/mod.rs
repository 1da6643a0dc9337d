//! Double-entry balance checking.
//!
//! This module implements the pre-commit gate for ledger entries:
//! - Entry lines tagged debit or credit, already converted to a base currency
//! - The balanced-entry validator (`validate_balanced`)
//! - Typed errors for the three ways an entry can be malformed
//!
//! Entries are transient. They are built by a caller, validated, and handed
//! on to persistence; nothing here stores them.

pub mod entry;
pub mod error;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{Direction, Entry, EntryLine};
pub use error::LedgerError;
pub use validation::{validate_balanced, BALANCE_TOLERANCE};
