//! Chat command parsing.

/// Supported chat commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Help,
    Balance,
    Transactions { count: Option<usize> },
}

/// Parse error for chat command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    InvalidCount(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::InvalidCount(value) => {
                write!(f, "invalid transaction count `{value}` (use a whole number)")
            }
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a chat message into a command.
///
/// The first word must start with `prefix`; a trailing `@botname` is ignored.
/// Words after the command's arguments are ignored.
pub fn parse_command(text: &str, prefix: &str) -> Result<ChatCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    let Some(name) = raw_command.strip_prefix(prefix) else {
        return Err(CommandParseError::NotACommand);
    };

    let name = name.split_once('@').map_or(name, |(head, _)| head);

    match name {
        "start" | "help" => Ok(ChatCommand::Help),
        "balance" => Ok(ChatCommand::Balance),
        "transactions" => {
            let count = parts
                .next()
                .map(|raw| {
                    raw.parse::<usize>()
                        .map_err(|_| CommandParseError::InvalidCount(raw.to_string()))
                })
                .transpose()?;
            Ok(ChatCommand::Transactions { count })
        }
        other => Err(CommandParseError::UnknownCommand(format!("{prefix}{other}"))),
    }
}

/// Help text returned by `help` and `start`.
#[must_use]
pub fn command_help(prefix: &str, default_count: usize) -> String {
    format!(
        "📋 Commands\n\n\
        {prefix}balance - 🏦 Wallet balance and USD value\n\
        {prefix}transactions [count] - 📜 Recent transactions (default {default_count})\n\
        {prefix}help - Show all commands"
    )
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("balance", "Wallet balance and USD value"),
        ("transactions", "Recent transactions"),
        ("help", "Show all commands"),
    ]
}
