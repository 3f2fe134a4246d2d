//! Chat command configuration.

use serde::Deserialize;

use crate::application::query::DEFAULT_TRANSACTION_COUNT;

/// Upper bound for listed transactions; one embed holds at most 25 fields.
pub const MAX_TRANSACTIONS_LIMIT: usize = 25;

/// Chat command configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    /// Prefix every command word must start with (default: `!`).
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Count used by `transactions` without an argument (default: 5).
    #[serde(default = "default_transactions")]
    pub default_transactions: usize,
    /// Largest count `transactions` will list (default: 25).
    #[serde(default = "default_max_transactions")]
    pub max_transactions: usize,
    /// Restrict commands to this chat. Any chat when unset.
    #[serde(default)]
    pub chat_id: Option<i64>,
}

fn default_prefix() -> String {
    "!".to_string()
}

const fn default_transactions() -> usize {
    DEFAULT_TRANSACTION_COUNT
}

const fn default_max_transactions() -> usize {
    MAX_TRANSACTIONS_LIMIT
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            default_transactions: default_transactions(),
            max_transactions: default_max_transactions(),
            chat_id: None,
        }
    }
}
