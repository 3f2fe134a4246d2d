//! CoinGecko price configuration.

use serde::Deserialize;

/// Price quote configuration (`[price]`).
#[derive(Debug, Clone, Deserialize)]
pub struct PriceConfig {
    /// Simple price endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// CoinGecko coin id of the watched asset.
    #[serde(default = "default_coin_id")]
    pub coin_id: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.coingecko.com/api/v3/simple/price".to_string()
}

fn default_coin_id() -> String {
    "litecoin".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            coin_id: default_coin_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
