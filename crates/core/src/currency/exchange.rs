//! Exchange rate lookup.

use std::collections::HashMap;

use pocketbook_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Anything that can quote a rate between two currencies.
pub trait RateSource {
    /// Returns how many units of `to` one unit of `from` buys.
    fn rate(&self, from: Currency, to: Currency) -> Option<Decimal>;
}

/// A table of quotes against a single base currency.
///
/// Each quote is the number of base units one unit of the quoted currency is
/// worth (`MXN: 0.058` with base USD means 1 MXN = 0.058 USD). Rates between
/// two non-base currencies are derived through the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Currency the quotes are expressed in.
    pub base: Currency,
    /// Value of one unit of each currency, in `base`.
    #[serde(default)]
    pub quotes: HashMap<Currency, Decimal>,
}

impl ExchangeRates {
    /// Creates an empty table for `base`.
    #[must_use]
    pub fn new(base: Currency) -> Self {
        Self {
            base,
            quotes: HashMap::new(),
        }
    }

    /// Adds or replaces the quote for `currency`.
    #[must_use]
    pub fn with_quote(mut self, currency: Currency, value_in_base: Decimal) -> Self {
        self.quotes.insert(currency, value_in_base);
        self
    }

    fn value_in_base(&self, currency: Currency) -> Option<Decimal> {
        if currency == self.base {
            Some(Decimal::ONE)
        } else {
            self.quotes.get(&currency).copied()
        }
    }
}

impl RateSource for ExchangeRates {
    fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        let from_value = self.value_in_base(from)?;
        let to_value = self.value_in_base(to)?;
        if to_value.is_zero() {
            // Surfaces as an invalid rate rather than a missing one.
            return Some(Decimal::ZERO);
        }
        from_value.checked_div(to_value)
    }
}
