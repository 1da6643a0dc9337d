//! Typed IDs for records that pass validation.
//!
//! Each ID wraps a UUID v7 and renders with a short kind prefix
//! (`entry_…`, `txn_…`, `acct_…`) so that IDs quoted in error messages
//! and logs say what they refer to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when parsing a typed ID from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    /// The text does not start with the expected prefix.
    #[error("expected an ID starting with '{expected}_'")]
    WrongPrefix {
        /// The prefix the ID type expects.
        expected: &'static str,
    },
    /// The part after the prefix is not a UUID.
    #[error("invalid ID body: {0}")]
    InvalidUuid(#[from] uuid::Error),
}

macro_rules! typed_id {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Text prefix used when rendering this ID.
            pub const PREFIX: &'static str = $prefix;

            /// Creates a new time-ordered ID.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}_{}", Self::PREFIX, self.0.simple())
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let body = s
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .ok_or(IdParseError::WrongPrefix {
                        expected: Self::PREFIX,
                    })?;
                Ok(Self(Uuid::parse_str(body)?))
            }
        }
    };
}

typed_id!(EntryId, "entry", "Identifier of a ledger entry built for validation.");
typed_id!(TransactionId, "txn", "Identifier of an accepted income or expense.");
typed_id!(AccountId, "acct", "Identifier of an accepted asset or liability account.");
