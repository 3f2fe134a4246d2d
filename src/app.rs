//! App orchestration module.
//!
//! Runs the transaction watcher and the chat command listener on the current
//! task until ctrl-c.

use tokio::signal;
use tracing::{info, warn};

use crate::application::{run_poll_loop, WalletQueries};
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_notifier, build_queries, build_sources, build_watcher};
use crate::infrastructure::config::settings::Config;

/// Main application struct.
pub struct App;

impl App {
    /// Run the watcher and the command listener until a shutdown signal.
    ///
    /// The poll loop owns the watcher; command handlers only share the
    /// read-only data sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the clients cannot be built from the configuration.
    pub async fn run(config: Config) -> Result<()> {
        let sources = build_sources(&config)?;
        let notifier = build_notifier(&config);
        info!(notifier = notifier.name(), "Notifier selected");

        let mut watcher = build_watcher(&config, &sources, notifier);
        let queries = build_queries(&config, &sources);

        tokio::select! {
            () = run_poll_loop(&mut watcher, config.poll_interval) => {}
            () = serve_commands(&config, queries) => {}
            result = signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!(error = %e, "Failed to listen for shutdown signal");
                }
                info!("Shutdown signal received");
            }
        }

        Ok(())
    }
}

/// Answer chat commands while the watcher runs. Never completes.
#[cfg(feature = "telegram")]
async fn serve_commands(config: &Config, queries: WalletQueries) {
    use crate::adapter::inbound::telegram::{run_command_listener, TelegramConfig, TelegramControl};

    match TelegramConfig::from_env(config.commands.chat_id) {
        Some(telegram) => {
            let control = TelegramControl::new(
                queries,
                config.commands.prefix.clone(),
                config.commands.default_transactions,
            );
            run_command_listener(telegram, control).await;
        }
        None => info!("TELEGRAM_BOT_TOKEN not set; chat commands disabled"),
    }

    std::future::pending::<()>().await;
}

#[cfg(not(feature = "telegram"))]
async fn serve_commands(_config: &Config, _queries: WalletQueries) {
    info!("Built without the telegram feature; chat commands disabled");
    std::future::pending::<()>().await;
}
