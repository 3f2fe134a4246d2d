//! `ltcwatch balance` and `ltcwatch transactions`: one-shot wallet queries.

use crate::application::WalletQueries;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_queries, build_sources};
use crate::infrastructure::config::settings::Config;

use super::output;

fn queries(config: &Config) -> Result<WalletQueries> {
    let sources = build_sources(config)?;
    Ok(build_queries(config, &sources))
}

/// Print the balance of the watched address.
///
/// A failed fetch prints a warning and still succeeds, like the chat command.
///
/// # Errors
///
/// Returns an error if the clients cannot be built from the configuration.
pub async fn execute_balance(config: &Config) -> Result<()> {
    let reply = queries(config)?.balance().await;
    output::reply(&reply);
    Ok(())
}

/// Print up to `count` recent transactions, the configured default when `None`.
///
/// # Errors
///
/// Returns an error if the clients cannot be built from the configuration.
pub async fn execute_transactions(config: &Config, count: Option<usize>) -> Result<()> {
    let count = count.unwrap_or(config.commands.default_transactions);
    let reply = queries(config)?.recent_transactions(count).await;
    output::reply(&reply);
    Ok(())
}
