//! Telegram command execution against the wallet queries.

use crate::application::WalletQueries;

use super::command::{command_help, ChatCommand};
use super::render::{escape_markdown, render_reply};

/// Command executor shared by every inbound message.
#[derive(Clone)]
pub struct TelegramControl {
    queries: WalletQueries,
    prefix: String,
    default_transactions: usize,
}

impl TelegramControl {
    #[must_use]
    pub fn new(
        queries: WalletQueries,
        prefix: impl Into<String>,
        default_transactions: usize,
    ) -> Self {
        Self {
            queries,
            prefix: prefix.into(),
            default_transactions,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Help text for the configured prefix, `MarkdownV2` escaped.
    #[must_use]
    pub fn help(&self) -> String {
        escape_markdown(&command_help(&self.prefix, self.default_transactions))
    }

    /// Execute a parsed command and return the `MarkdownV2` reply.
    pub async fn execute(&self, command: ChatCommand) -> String {
        match command {
            ChatCommand::Help => self.help(),
            ChatCommand::Balance => render_reply(&self.queries.balance().await),
            ChatCommand::Transactions { count } => {
                let count = count.unwrap_or(self.default_transactions);
                render_reply(&self.queries.recent_transactions(count).await)
            }
        }
    }
}
