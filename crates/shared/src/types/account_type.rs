//! Account type tags for assets and liabilities.

use serde::{Deserialize, Serialize};

/// The kind of account a user tracks.
///
/// Tags are stored and exchanged in `snake_case`, e.g. `credit_card`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Checking / current account.
    Checking,
    /// Savings account.
    Savings,
    /// Brokerage or investment account.
    Investment,
    /// Crypto wallet or exchange balance.
    Crypto,
    /// Real estate, vehicles and other physical property.
    Property,
    /// Credit card balance.
    CreditCard,
    /// Personal or auto loan.
    Loan,
    /// Mortgage.
    Mortgage,
    /// Anything else.
    Other,
}

impl AccountType {
    /// Every account type tag.
    pub const ALL: [Self; 9] = [
        Self::Checking,
        Self::Savings,
        Self::Investment,
        Self::Crypto,
        Self::Property,
        Self::CreditCard,
        Self::Loan,
        Self::Mortgage,
        Self::Other,
    ];

    /// Returns the wire tag for this type.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Investment => "investment",
            Self::Crypto => "crypto",
            Self::Property => "property",
            Self::CreditCard => "credit_card",
            Self::Loan => "loan",
            Self::Mortgage => "mortgage",
            Self::Other => "other",
        }
    }

    /// Returns true if balances of this type are owed rather than owned.
    #[must_use]
    pub const fn is_liability(self) -> bool {
        matches!(self, Self::CreditCard | Self::Loan | Self::Mortgage)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| format!("Unknown account type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tags_round_trip() {
        for kind in AccountType::ALL {
            assert_eq!(AccountType::from_str(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!(AccountType::from_str("invalid").is_err());
        assert!(AccountType::from_str("Checking").is_err());
        assert!(AccountType::from_str("credit card").is_err());
    }

    #[test]
    fn test_liabilities() {
        let liabilities: Vec<_> = AccountType::ALL
            .into_iter()
            .filter(|kind| kind.is_liability())
            .collect();
        assert_eq!(
            liabilities,
            vec![AccountType::CreditCard, AccountType::Loan, AccountType::Mortgage]
        );
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&AccountType::CreditCard).unwrap(),
            "\"credit_card\""
        );
    }
}
