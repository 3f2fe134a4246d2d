//! Notifier port for outbound chat messages.
//!
//! Delivery is awaited by the caller but is at-most-once: a failed send is
//! logged and never retried.

use async_trait::async_trait;
use tracing::info;

use crate::domain::Notice;
use crate::error::NotifyError;

/// Trait for notification backends.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notice to the configured channel.
    async fn send(&self, notice: &Notice) -> Result<(), NotifyError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _notice: &Notice) -> Result<(), NotifyError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// A logging notifier that writes notices via tracing.
///
/// Used when no webhook URL is configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notice: &Notice) -> Result<(), NotifyError> {
        let fields: Vec<String> = notice
            .fields
            .iter()
            .map(|field| format!("{}={}", field.name, field.plain_value()))
            .collect();
        info!(title = %notice.title, fields = %fields.join(", "), "Notice");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
