//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the chat webhook backend.

pub mod webhook;

pub use webhook::{WebhookConfig, WebhookNotifier};
