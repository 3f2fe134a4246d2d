//! Telegram bot listener for wallet commands.
//!
//! Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ChatId, ParseMode};
use tracing::{error, info, warn};

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::TelegramControl;

/// Environment variable holding the bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Prefix Telegram recognises for its command menu.
const TELEGRAM_MENU_PREFIX: &str = "/";

/// Configuration for the Telegram command listener.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Chat allowed to issue commands; any chat when unset.
    pub chat_id: Option<i64>,
}

impl TelegramConfig {
    /// Create configuration from the `TELEGRAM_BOT_TOKEN` environment variable.
    ///
    /// Returns `None` if the token is missing or empty.
    #[must_use]
    pub fn from_env(chat_id: Option<i64>) -> Option<Self> {
        let bot_token = std::env::var(BOT_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty())?;

        Some(Self { bot_token, chat_id })
    }
}

/// Listen for inbound commands until the dispatcher stops.
pub async fn run_command_listener(config: TelegramConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let allowed_chat = config.chat_id.map(ChatId);

    if control.prefix() == TELEGRAM_MENU_PREFIX {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    info!(
        chat_id = ?config.chat_id,
        prefix = %control.prefix(),
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(response) =
                command_response_for_message(text, msg.chat.id, allowed_chat, &control).await
            {
                if let Err(e) = bot
                    .send_message(msg.chat.id, response)
                    .parse_mode(ParseMode::MarkdownV2)
                    .await
                {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;

    warn!("Telegram command listener stopped");
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
