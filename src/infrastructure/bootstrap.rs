//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::blockcypher::BlockCypherClient;
use crate::adapter::outbound::coingecko::CoinGeckoClient;
use crate::adapter::outbound::notifier::{WebhookConfig, WebhookNotifier};
use crate::application::{TransactionWatcher, TxLinks, WalletQueries};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{LogNotifier, Notifier, PriceSource, WalletSource};

/// Explorer and price clients shared by the watcher and the commands.
#[derive(Clone)]
pub struct Sources {
    pub wallet: Arc<dyn WalletSource>,
    pub prices: Arc<dyn PriceSource>,
}

/// Build the HTTP-backed data sources from configuration.
///
/// # Errors
///
/// Returns an error if an API URL cannot be used as a base URL.
pub fn build_sources(config: &Config) -> Result<Sources> {
    let wallet = BlockCypherClient::from_config(&config.explorer)?;
    let prices = CoinGeckoClient::from_config(&config.price)?;
    Ok(Sources {
        wallet: Arc::new(wallet),
        prices: Arc::new(prices),
    })
}

/// Build the outbound notifier.
///
/// Falls back to [`LogNotifier`] when no webhook URL is present in the
/// environment, so the watcher keeps running.
#[must_use]
pub fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    match WebhookConfig::from_env(config.webhook.username.clone()) {
        Some(webhook) => {
            info!("Webhook notifier enabled");
            Arc::new(WebhookNotifier::new(webhook))
        }
        None => {
            warn!("LTCWATCH_WEBHOOK_URL not set; notices will only be logged");
            Arc::new(LogNotifier)
        }
    }
}

/// Build the transaction watcher for the configured address.
#[must_use]
pub fn build_watcher(
    config: &Config,
    sources: &Sources,
    notifier: Arc<dyn Notifier>,
) -> TransactionWatcher {
    TransactionWatcher::new(
        config.wallet.address.clone(),
        Arc::clone(&sources.wallet),
        Arc::clone(&sources.prices),
        notifier,
        TxLinks::new(config.explorer.tx_url.clone()),
    )
}

/// Build the on-demand query handlers for the configured address.
#[must_use]
pub fn build_queries(config: &Config, sources: &Sources) -> WalletQueries {
    WalletQueries::new(
        config.wallet.address.clone(),
        Arc::clone(&sources.wallet),
        Arc::clone(&sources.prices),
        TxLinks::new(config.explorer.tx_url.clone()),
        config.commands.max_transactions,
    )
}
