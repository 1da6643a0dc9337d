//! Supported currencies and the configurable currency whitelist.
//!
//! The set of currencies the application knows about is fixed at compile
//! time. Which of them a deployment accepts is a runtime choice carried by
//! [`CurrencyWhitelist`].

use serde::{Deserialize, Serialize};

/// Currency codes known to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Mexican Peso
    Mxn,
    /// Euro
    Eur,
    /// Bitcoin
    Btc,
    /// Ether
    Eth,
}

impl Currency {
    /// Every known currency, in display order.
    pub const ALL: [Self; 5] = [Self::Usd, Self::Mxn, Self::Eur, Self::Btc, Self::Eth];

    /// Returns the ISO-style code for this currency.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Mxn => "MXN",
            Self::Eur => "EUR",
            Self::Btc => "BTC",
            Self::Eth => "ETH",
        }
    }

    /// Number of decimal places amounts in this currency are kept at.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Usd | Self::Mxn | Self::Eur => 2,
            Self::Btc | Self::Eth => 8,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    /// Parses an exact, upper-case currency code. `"usd"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| format!("Unknown currency: {s}"))
    }
}

/// The subset of [`Currency`] values a deployment accepts from users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyWhitelist(Vec<Currency>);

impl CurrencyWhitelist {
    /// Builds a whitelist from an explicit list of currencies.
    #[must_use]
    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let mut list: Vec<Currency> = Vec::new();
        for currency in currencies {
            if !list.contains(&currency) {
                list.push(currency);
            }
        }
        Self(list)
    }

    /// Fiat-only whitelist: USD, MXN and EUR.
    #[must_use]
    pub fn fiat() -> Self {
        Self::new([Currency::Usd, Currency::Mxn, Currency::Eur])
    }

    /// Looks up an exact code and returns the currency if it is accepted.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<Currency> {
        self.0.iter().copied().find(|currency| currency.code() == code)
    }

    /// The accepted currencies, in configured order.
    #[must_use]
    pub fn as_slice(&self) -> &[Currency] {
        &self.0
    }
}

impl Default for CurrencyWhitelist {
    fn default() -> Self {
        Self::new(Currency::ALL)
    }
}
