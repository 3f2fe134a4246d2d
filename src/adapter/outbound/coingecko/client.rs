//! CoinGecko simple price client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use url::Url;

use super::settings::PriceConfig;
use crate::domain::Usd;
use crate::error::{ConfigError, FetchError, Result};
use crate::port::PriceSource;

const VS_CURRENCY: &str = "usd";

/// Response of `GET /simple/price`: coin id → currency → price.
type SimplePriceResponse = HashMap<String, HashMap<String, Decimal>>;

/// HTTP client for the CoinGecko simple price API.
pub struct CoinGeckoClient {
    http: HttpClient,
    quote_url: Url,
    coin_id: String,
}

impl CoinGeckoClient {
    /// Create a client querying `api_url` for `coin_id` in USD.
    #[must_use]
    pub fn new(http: HttpClient, mut api_url: Url, coin_id: impl Into<String>) -> Self {
        let coin_id = coin_id.into();
        api_url
            .query_pairs_mut()
            .append_pair("ids", &coin_id)
            .append_pair("vs_currencies", VS_CURRENCY);
        Self {
            http,
            quote_url: api_url,
            coin_id,
        }
    }

    /// Build a client from `[price]` settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid.
    pub fn from_config(config: &PriceConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "price.api_url",
            reason: e.to_string(),
        })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self::new(http, api_url, config.coin_id.clone()))
    }

    fn extract_price(
        &self,
        response: &SimplePriceResponse,
    ) -> std::result::Result<Usd, FetchError> {
        response
            .get(&self.coin_id)
            .and_then(|quotes| quotes.get(VS_CURRENCY))
            .copied()
            .ok_or_else(|| {
                FetchError::Parse(format!("no {VS_CURRENCY} quote for {}", self.coin_id))
            })
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn fetch_quote(&self) -> std::result::Result<Usd, FetchError> {
        debug!(url = %self.quote_url, "Fetching price quote");

        let body = self
            .http
            .get(self.quote_url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: SimplePriceResponse = serde_json::from_str(&body)?;
        let price = self.extract_price(&response)?;

        debug!(coin = %self.coin_id, price = %price, "Fetched price quote");
        Ok(price)
    }
}
