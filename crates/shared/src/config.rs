//! Application configuration management.

use serde::Deserialize;

use crate::types::{Currency, CurrencyWhitelist};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Field and ledger validation settings.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Validation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Currency every ledger entry is balanced in.
    #[serde(default = "default_base_currency")]
    pub base_currency: Currency,
    /// Currencies users may enter amounts in.
    #[serde(default)]
    pub allowed_currencies: CurrencyWhitelist,
}

fn default_base_currency() -> Currency {
    Currency::Usd
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            allowed_currencies: CurrencyWhitelist::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "pocketbook=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("POCKETBOOK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("validation.allowed_currencies")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
