//! `ltcwatch check`: validate configuration without starting the watcher.

use std::path::Path;

#[cfg(feature = "telegram")]
use crate::adapter::inbound::telegram::TelegramConfig;
use crate::adapter::outbound::notifier::WebhookConfig;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_sources;
use crate::infrastructure::config::settings::Config;

use super::output;

/// Load and validate the configuration file, then print a summary.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or fails validation.
pub fn execute_check<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    build_sources(&config)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Address", &config.wallet.address);
    output::field("Explorer", &config.explorer.api_url);
    output::field("Price coin", &config.price.coin_id);
    output::field(
        "Poll interval",
        format!("{}s", config.poll_interval.as_secs()),
    );
    output::field("Prefix", &config.commands.prefix);
    output::field(
        "Transactions",
        format!(
            "default {}, max {}",
            config.commands.default_transactions, config.commands.max_transactions
        ),
    );

    if WebhookConfig::from_env(config.webhook.username.clone()).is_some() {
        output::success("Webhook URL detected");
    } else {
        output::warning("Webhook URL not set (LTCWATCH_WEBHOOK_URL); notices will only be logged");
    }

    report_telegram(&config);

    output::success("Configuration check complete");
    Ok(())
}

#[cfg(feature = "telegram")]
fn report_telegram(config: &Config) {
    match TelegramConfig::from_env(config.commands.chat_id) {
        Some(telegram) => {
            output::success("Telegram bot token detected");
            match telegram.chat_id {
                Some(chat_id) => output::field("Chat", chat_id),
                None => output::field("Chat", "any"),
            }
        }
        None => output::warning("TELEGRAM_BOT_TOKEN not set; chat commands disabled"),
    }
}

#[cfg(not(feature = "telegram"))]
fn report_telegram(_config: &Config) {
    output::field("Telegram", "not compiled in");
}
