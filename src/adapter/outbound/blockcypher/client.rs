//! BlockCypher REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use super::dto::AddressFullResponse;
use super::settings::ExplorerConfig;
use crate::domain::WalletSnapshot;
use crate::error::{ConfigError, FetchError, Result};
use crate::port::WalletSource;

/// HTTP client for the BlockCypher address API.
///
/// One request per call, bounded by the configured timeout, no retries.
pub struct BlockCypherClient {
    http: HttpClient,
    api_url: Url,
}

impl BlockCypherClient {
    /// Create a client for the given chain API base URL
    /// (e.g., `https://api.blockcypher.com/v1/ltc/main`).
    #[must_use]
    pub fn new(http: HttpClient, api_url: Url) -> Self {
        Self { http, api_url }
    }

    /// Build a client from `[explorer]` settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid.
    pub fn from_config(config: &ExplorerConfig) -> Result<Self> {
        let api_url = parse_base_url(&config.api_url)?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self::new(http, api_url))
    }

    fn address_url(&self, address: &str) -> std::result::Result<Url, FetchError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::Parse(format!("cannot append path to {}", self.api_url)))?
            .pop_if_empty()
            .extend(["addrs", address, "full"]);
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field: "explorer.api_url",
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            field: "explorer.api_url",
            reason: "must be a hierarchical http(s) URL".to_string(),
        }
        .into());
    }
    Ok(url)
}

#[async_trait]
impl WalletSource for BlockCypherClient {
    async fn fetch_wallet_info(
        &self,
        address: &str,
    ) -> std::result::Result<WalletSnapshot, FetchError> {
        let url = self.address_url(address)?;
        debug!(url = %url, "Fetching address info");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: AddressFullResponse = serde_json::from_str(&body)?;
        let snapshot = WalletSnapshot::from(response);

        debug!(
            balance = snapshot.balance,
            transactions = snapshot.transactions.len(),
            "Fetched address info"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_url_appends_segments() {
        let client = BlockCypherClient::from_config(&ExplorerConfig::default()).unwrap();
        assert_eq!(
            client.address_url("LWatched").unwrap().as_str(),
            "https://api.blockcypher.com/v1/ltc/main/addrs/LWatched/full"
        );
    }

    #[test]
    fn address_url_tolerates_trailing_slash() {
        let client = BlockCypherClient::new(
            HttpClient::new(),
            Url::parse("http://127.0.0.1:9999/").unwrap(),
        );
        assert_eq!(
            client.address_url("L/../x").unwrap().as_str(),
            "http://127.0.0.1:9999/addrs/L%2F..%2Fx/full"
        );
    }

    #[test]
    fn from_config_rejects_invalid_url() {
        let config = ExplorerConfig {
            api_url: "not a url".to_string(),
            ..ExplorerConfig::default()
        };
        assert!(BlockCypherClient::from_config(&config).is_err());
    }
}
