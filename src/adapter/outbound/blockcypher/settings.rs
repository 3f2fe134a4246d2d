//! BlockCypher explorer configuration.

use serde::Deserialize;

/// Block explorer configuration (`[explorer]`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerConfig {
    /// API base URL for the chain, e.g. `https://api.blockcypher.com/v1/ltc/main`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Public transaction page prefix used for links.
    #[serde(default = "default_tx_url")]
    pub tx_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.blockcypher.com/v1/ltc/main".to_string()
}

fn default_tx_url() -> String {
    "https://live.blockcypher.com/ltc/tx".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            tx_url: default_tx_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
