//! On-demand wallet queries behind the chat and CLI commands.
//!
//! Queries are stateless and never touch the watcher's last-seen hash.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{to_ltc, usd_value, Notice};
use crate::port::{PriceSource, WalletSource};

use super::format::{balance_notice, transactions_notice, TxLinks};
use super::quote::price_or_zero;

pub const BALANCE_WARNING: &str = "⚠️ Could not fetch balance.";
pub const TRANSACTIONS_WARNING: &str = "⚠️ Could not fetch transactions.";

/// Number of transactions listed when no count is given.
pub const DEFAULT_TRANSACTION_COUNT: usize = 5;

/// Reply to a command: either a structured notice or a short warning.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Notice(Notice),
    Warning(String),
}

/// Command handlers for the watched address.
#[derive(Clone)]
pub struct WalletQueries {
    address: String,
    wallet: Arc<dyn WalletSource>,
    prices: Arc<dyn PriceSource>,
    links: TxLinks,
    max_transactions: usize,
}

impl WalletQueries {
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        wallet: Arc<dyn WalletSource>,
        prices: Arc<dyn PriceSource>,
        links: TxLinks,
        max_transactions: usize,
    ) -> Self {
        Self {
            address: address.into(),
            wallet,
            prices,
            links,
            max_transactions,
        }
    }

    /// Balance in LTC and its USD value at the current price.
    pub async fn balance(&self) -> Reply {
        let snapshot = match self.wallet.fetch_wallet_info(&self.address).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(address = %self.address, error = %err, "Balance query failed");
                return Reply::Warning(BALANCE_WARNING.to_string());
            }
        };

        let balance_ltc = to_ltc(snapshot.balance);
        let price = price_or_zero(self.prices.as_ref()).await;

        Reply::Notice(balance_notice(
            balance_ltc,
            usd_value(balance_ltc, price),
            price,
        ))
    }

    /// Up to `count` newest transactions with the amount received in each.
    ///
    /// `count` is capped at the configured maximum.
    pub async fn recent_transactions(&self, count: usize) -> Reply {
        let count = count.min(self.max_transactions);

        let snapshot = match self.wallet.fetch_wallet_info(&self.address).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(address = %self.address, error = %err, "Transactions query failed");
                return Reply::Warning(TRANSACTIONS_WARNING.to_string());
            }
        };

        if let Err(err) = snapshot.newest() {
            warn!(address = %self.address, error = %err, "Transactions query failed");
            return Reply::Warning(TRANSACTIONS_WARNING.to_string());
        }

        Reply::Notice(transactions_notice(
            &self.links,
            &self.address,
            snapshot.recent(count),
            count,
        ))
    }
}
