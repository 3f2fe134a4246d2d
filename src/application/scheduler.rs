//! Fixed-interval driver for the transaction watcher.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use super::watcher::{TickOutcome, TransactionWatcher};

/// Seconds between watcher ticks.
pub const POLL_INTERVAL_SECS: u64 = 60;

/// Tick the watcher every `every`, starting immediately. Never returns.
///
/// A slow tick delays the following ones instead of bursting to catch up.
pub async fn run_poll_loop(watcher: &mut TransactionWatcher, every: Duration) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        address = %watcher.address(),
        interval_secs = every.as_secs(),
        "Transaction watcher started"
    );

    loop {
        ticker.tick().await;
        match watcher.tick().await {
            TickOutcome::Notified { hash, delivered } => {
                debug!(hash = %hash, delivered, "Tick dispatched a notice");
            }
            TickOutcome::Advanced { hash } => debug!(hash = %hash, "Tick advanced last-seen hash"),
            TickOutcome::Unchanged => debug!("Tick found no change"),
            TickOutcome::Skipped => debug!("Tick skipped"),
        }
    }
}
