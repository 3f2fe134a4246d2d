//! Telegram command handling.
//!
//! Provides the bot integration that answers balance and transaction
//! history commands for the watched address.

mod auth;
mod command;
mod control;
mod render;

pub mod bot;

pub use bot::{run_command_listener, TelegramConfig};
pub use command::{command_help, parse_command, ChatCommand, CommandParseError};
pub use control::TelegramControl;
pub use render::{escape_markdown, render_reply};
