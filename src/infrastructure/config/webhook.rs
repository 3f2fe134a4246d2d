//! Webhook notification configuration.
//!
//! The webhook URL is a secret and only comes from the environment; the file
//! carries presentation settings.

use serde::Deserialize;

/// `[webhook]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookAppConfig {
    /// Display name override for posted messages.
    #[serde(default)]
    pub username: Option<String>,
}
