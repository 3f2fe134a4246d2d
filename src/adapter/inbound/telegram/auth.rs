//! Authorization for Telegram command handling.

use teloxide::types::ChatId;
use tracing::warn;

use super::command::{parse_command, CommandParseError};
use super::control::TelegramControl;
use super::render::escape_markdown;

/// Process a message and return a response if it's an authorized command.
///
/// Returns `None` for:
/// - Messages from unauthorized chats (when a chat restriction is set)
/// - Messages that are not commands (don't start with the prefix)
///
/// Returns `Some(response)` for:
/// - Valid commands from an authorized chat
/// - Invalid commands (with error message and help)
pub async fn command_response_for_message(
    text: &str,
    incoming_chat: ChatId,
    allowed_chat: Option<ChatId>,
    control: &TelegramControl,
) -> Option<String> {
    if !is_authorized_chat(incoming_chat, allowed_chat) {
        return None;
    }

    match parse_command(text, control.prefix()) {
        Ok(command) => Some(control.execute(command).await),
        Err(CommandParseError::NotACommand) => None,
        Err(err) => Some(format!(
            "{}\n\n{}",
            escape_markdown(&format!("Invalid command: {err}")),
            control.help()
        )),
    }
}

/// Check if a chat is authorized to send commands.
fn is_authorized_chat(incoming_chat: ChatId, allowed_chat: Option<ChatId>) -> bool {
    match allowed_chat {
        None => true,
        Some(allowed) if allowed == incoming_chat => true,
        Some(_) => {
            warn!(
                chat_id = incoming_chat.0,
                "Ignoring Telegram message from unauthorized chat"
            );
            false
        }
    }
}
