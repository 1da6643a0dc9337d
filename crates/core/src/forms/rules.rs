//! Settings that submission validation depends on.

use chrono::{NaiveDate, Utc};
use pocketbook_shared::config::ValidationConfig;
use pocketbook_shared::types::CurrencyWhitelist;

/// Context for validating submissions.
#[derive(Debug, Clone)]
pub struct SubmissionRules {
    /// Currencies users may enter amounts in.
    pub allowed_currencies: CurrencyWhitelist,
    /// Reference date for date-range checks.
    pub today: NaiveDate,
}

impl SubmissionRules {
    /// Rules from configuration, dated today (UTC).
    #[must_use]
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self {
            allowed_currencies: config.allowed_currencies.clone(),
            today: Utc::now().date_naive(),
        }
    }
}

impl Default for SubmissionRules {
    fn default() -> Self {
        Self::from_config(&ValidationConfig::default())
    }
}
