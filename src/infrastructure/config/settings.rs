//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets (bot token, webhook URL)
//! only come from the environment, and `LTCWATCH_ADDRESS` overrides the
//! watched address.
//!
//! # Example
//!
//! ```no_run
//! use ltcwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::commands::{CommandsConfig, MAX_TRANSACTIONS_LIMIT};
use super::logging::LoggingConfig;
use super::wallet::WalletConfig;
use super::webhook::WebhookAppConfig;
use crate::adapter::outbound::blockcypher::ExplorerConfig;
use crate::adapter::outbound::coingecko::PriceConfig;
use crate::application::POLL_INTERVAL_SECS;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional except the wallet
/// address, which may also come from `LTCWATCH_ADDRESS`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The watched address.
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Block explorer endpoint and link settings.
    #[serde(default)]
    pub explorer: ExplorerConfig,

    /// Price quote endpoint settings.
    #[serde(default)]
    pub price: PriceConfig,

    /// Webhook presentation settings.
    #[serde(default)]
    pub webhook: WebhookAppConfig,

    /// Chat command settings.
    #[serde(default)]
    pub commands: CommandsConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Time between watcher ticks. Fixed; not read from the file.
    #[serde(skip, default = "default_poll_interval")]
    pub poll_interval: Duration,
}

const fn default_poll_interval() -> Duration {
    Duration::from_secs(POLL_INTERVAL_SECS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet: WalletConfig::default(),
            explorer: ExplorerConfig::default(),
            price: PriceConfig::default(),
            webhook: WebhookAppConfig::default(),
            commands: CommandsConfig::default(),
            logging: LoggingConfig::default(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies the `LTCWATCH_ADDRESS` override and trims the address before
    /// validating.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., no address, unparsable URL)
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        config.wallet.resolve();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.wallet.address.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "wallet.address",
            }
            .into());
        }
        if self.wallet.address.trim() != self.wallet.address {
            return Err(ConfigError::InvalidValue {
                field: "wallet.address",
                reason: "must not have surrounding whitespace".to_string(),
            }
            .into());
        }

        validate_url("explorer.api_url", &self.explorer.api_url)?;
        validate_url("explorer.tx_url", &self.explorer.tx_url)?;
        validate_url("price.api_url", &self.price.api_url)?;

        if self.explorer.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "explorer.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.price.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "price.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.price.coin_id.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "price.coin_id",
            }
            .into());
        }

        let commands = &self.commands;
        if commands.prefix.is_empty() || commands.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "commands.prefix",
                reason: "must be non-empty and contain no whitespace".to_string(),
            }
            .into());
        }
        if commands.max_transactions == 0 || commands.max_transactions > MAX_TRANSACTIONS_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "commands.max_transactions",
                reason: format!("must be between 1 and {MAX_TRANSACTIONS_LIMIT}"),
            }
            .into());
        }
        if commands.default_transactions == 0
            || commands.default_transactions > commands.max_transactions
        {
            return Err(ConfigError::InvalidValue {
                field: "commands.default_transactions",
                reason: "must be between 1 and max_transactions".to_string(),
            }
            .into());
        }

        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}
