//! Watched wallet configuration.

use serde::Deserialize;

/// Environment variable that overrides `[wallet].address`.
pub const ADDRESS_ENV: &str = "LTCWATCH_ADDRESS";

/// The single Litecoin address being watched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Address polled by the watcher and queried by commands.
    #[serde(default)]
    pub address: String,
}

impl WalletConfig {
    /// Apply `LTCWATCH_ADDRESS` and strip surrounding whitespace.
    pub fn resolve(&mut self) {
        self.apply_env_override();
        let trimmed = self.address.trim();
        if trimmed.len() != self.address.len() {
            self.address = trimmed.to_string();
        }
    }

    /// Replace the address with `LTCWATCH_ADDRESS` when it is set and non-empty.
    pub fn apply_env_override(&mut self) {
        if let Some(address) = std::env::var(ADDRESS_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            self.address = address;
        }
    }
}

