//! Transaction delta detection for the watched address.
//!
//! The watcher remembers the hash of the newest transaction it has evaluated.
//! Each tick fetches a fresh snapshot and compares its newest hash to that
//! value:
//!
//! ```text
//! Idle ──tick──► Fetching ──┬── fetch failed / no txs ──────────────► Idle
//!                           ├── same hash ──────────► Unchanged ────► Idle
//!                           └── new hash ───────────► NewTxPending ─► Idle
//!                                 received == 0: advance only
//!                                 received  > 0: notify, then advance
//! ```
//!
//! The last-seen hash advances whenever the newest hash changes, whatever the
//! notification outcome, so every distinct hash is evaluated exactly once.
//! Delivery is at-most-once: a failed send does not roll the hash back.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::domain::{to_ltc, usd_value};
use crate::port::{Notifier, PriceSource, WalletSource};

use super::format::{transaction_notice, TransactionAlert, TxLinks};
use super::quote::price_or_zero;

/// Result of a single watcher tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Fetch failed or the address has no transactions. State untouched.
    Skipped,
    /// Newest hash equals the last-seen hash.
    Unchanged,
    /// New hash with nothing received by the address; advanced without notifying.
    Advanced { hash: String },
    /// New incoming transaction; a notice was dispatched.
    Notified { hash: String, delivered: bool },
}

/// Polls one address and announces incoming transactions.
pub struct TransactionWatcher {
    address: String,
    wallet: Arc<dyn WalletSource>,
    prices: Arc<dyn PriceSource>,
    notifier: Arc<dyn Notifier>,
    links: TxLinks,
    last_seen: Option<String>,
}

impl TransactionWatcher {
    /// Create a watcher with no hash seen yet.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        wallet: Arc<dyn WalletSource>,
        prices: Arc<dyn PriceSource>,
        notifier: Arc<dyn Notifier>,
        links: TxLinks,
    ) -> Self {
        Self {
            address: address.into(),
            wallet,
            prices,
            notifier,
            links,
            last_seen: None,
        }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Hash of the newest transaction evaluated so far.
    #[must_use]
    pub fn last_seen_hash(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Run one fetch-compare-notify cycle.
    pub async fn tick(&mut self) -> TickOutcome {
        let snapshot = match self.wallet.fetch_wallet_info(&self.address).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(address = %self.address, error = %err, "Wallet fetch failed, skipping cycle");
                return TickOutcome::Skipped;
            }
        };

        let newest = match snapshot.newest() {
            Ok(tx) => tx,
            Err(err) => {
                debug!(address = %self.address, error = %err, "Nothing to compare, skipping cycle");
                return TickOutcome::Skipped;
            }
        };

        if self.last_seen.as_deref() == Some(newest.hash.as_str()) {
            debug!(hash = %newest.hash, "No new transaction");
            return TickOutcome::Unchanged;
        }

        let hash = newest.hash.clone();
        let received = newest.received_by(&self.address);

        let outcome = if received == 0 {
            info!(hash = %hash, "New transaction without incoming value, not notifying");
            TickOutcome::Advanced { hash: hash.clone() }
        } else {
            let ltc_amount = to_ltc(received);
            let price = price_or_zero(self.prices.as_ref()).await;
            let alert = TransactionAlert {
                hash: &hash,
                ltc_amount,
                usd_amount: usd_value(ltc_amount, price),
                sender: newest.sender(),
                price,
            };
            let notice = transaction_notice(&self.links, &alert, Utc::now());

            let delivered = match self.notifier.send(&notice).await {
                Ok(()) => {
                    info!(
                        hash = %hash,
                        amount = %ltc_amount,
                        notifier = self.notifier.name(),
                        "Incoming transaction announced"
                    );
                    true
                }
                Err(err) => {
                    error!(hash = %hash, error = %err, "Failed to deliver transaction notice");
                    false
                }
            };

            TickOutcome::Notified {
                hash: hash.clone(),
                delivered,
            }
        };

        self.last_seen = Some(hash);
        outcome
    }
}
