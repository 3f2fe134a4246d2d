//! Chat webhook notifier.
//!
//! Posts each [`Notice`] as a single embed using the Discord-compatible
//! webhook schema: `{ "username"?, "embeds": [{ title, color, fields, timestamp? }] }`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Field, Notice, Span};
use crate::error::NotifyError;
use crate::port::Notifier;

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_ENV: &str = "LTCWATCH_WEBHOOK_URL";

/// Legacy environment variable accepted when [`WEBHOOK_URL_ENV`] is unset.
pub const WEBHOOK_URL_FALLBACK_ENV: &str = "DISCORD_WEBHOOK";

const WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Configuration for the webhook notifier.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Webhook endpoint. Treated as a secret and read from the environment.
    pub url: String,
    /// Display name override for posted messages.
    pub username: Option<String>,
}

impl WebhookConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `LTCWATCH_WEBHOOK_URL`, falling back to `DISCORD_WEBHOOK`.
    /// Returns `None` if neither is set or both are empty.
    #[must_use]
    pub fn from_env(username: Option<String>) -> Option<Self> {
        let url = [WEBHOOK_URL_ENV, WEBHOOK_URL_FALLBACK_ENV]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())?;

        Some(Self { url, username })
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    color: u32,
    fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

fn embed_for(notice: &Notice) -> Embed {
    Embed {
        title: notice.title.clone(),
        color: notice.color,
        fields: notice.fields.iter().map(embed_field).collect(),
        timestamp: notice.timestamp.map(|at| at.to_rfc3339()),
    }
}

fn embed_field(field: &Field) -> EmbedField {
    let value = field
        .value
        .iter()
        .map(|span| match span {
            Span::Text(text) => text.clone(),
            Span::Link { label, url } => format!("[{label}]({url})"),
            Span::LineBreak => "\n".to_string(),
        })
        .collect();

    EmbedField {
        name: field.name.clone(),
        value,
        inline: field.inline,
    }
}

/// Notifier that posts embeds to a chat webhook.
pub struct WebhookNotifier {
    http: HttpClient,
    config: WebhookConfig,
}

impl WebhookNotifier {
    #[must_use]
    pub fn new(config: WebhookConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self { http, config }
    }

    fn payload<'a>(&'a self, notice: &Notice) -> WebhookPayload<'a> {
        WebhookPayload {
            username: self.config.username.as_deref(),
            embeds: vec![embed_for(notice)],
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, notice: &Notice) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(&self.config.url)
            .json(&self.payload(notice))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!(title = %notice.title, status = status.as_u16(), "Webhook accepted notice");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn notifier(username: Option<&str>) -> WebhookNotifier {
        WebhookNotifier::new(WebhookConfig {
            url: "http://127.0.0.1:1/hook".to_string(),
            username: username.map(str::to_string),
        })
    }

    #[test]
    fn payload_matches_embed_schema() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let notice = Notice::new("💰 New LTC Transaction", color::GREEN)
            .field(Field::new("Hash").push_link("abc", "https://x/tx/abc"))
            .field(Field::text("Sent From", "LSender"))
            .with_timestamp(at);

        let notifier = notifier(Some("ltcwatch"));
        let value = serde_json::to_value(notifier.payload(&notice)).unwrap();

        assert_eq!(
            value,
            json!({
                "username": "ltcwatch",
                "embeds": [{
                    "title": "💰 New LTC Transaction",
                    "color": 0x00FF00,
                    "fields": [
                        {"name": "Hash", "value": "[abc](https://x/tx/abc)", "inline": false},
                        {"name": "Sent From", "value": "LSender", "inline": false}
                    ],
                    "timestamp": "2024-05-01T12:00:00+00:00"
                }]
            })
        );
    }

    #[test]
    fn payload_omits_optional_keys() {
        let notice = Notice::new("t", color::BLUE).field(
            Field::new("abc...")
                .push_text("1.00000000 LTC")
                .push_line_break()
                .push_link("View", "https://x/tx/abc"),
        );

        let value = serde_json::to_value(notifier(None).payload(&notice)).unwrap();

        assert!(value.get("username").is_none());
        assert!(value["embeds"][0].get("timestamp").is_none());
        assert_eq!(
            value["embeds"][0]["fields"][0]["value"],
            "1.00000000 LTC\n[View](https://x/tx/abc)"
        );
    }

    #[test]
    fn from_env_prefers_primary_variable() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(WEBHOOK_URL_ENV, "https://primary/hook");
        std::env::set_var(WEBHOOK_URL_FALLBACK_ENV, "https://fallback/hook");

        let config = WebhookConfig::from_env(None).unwrap();
        assert_eq!(config.url, "https://primary/hook");

        std::env::remove_var(WEBHOOK_URL_ENV);
        let config = WebhookConfig::from_env(Some("bot".into())).unwrap();
        assert_eq!(config.url, "https://fallback/hook");
        assert_eq!(config.username.as_deref(), Some("bot"));

        std::env::remove_var(WEBHOOK_URL_FALLBACK_ENV);
        assert!(WebhookConfig::from_env(None).is_none());
    }
}
