//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the external dependencies of the watcher: the
//! block explorer, the price quote service and the notification channel.

pub mod notifier;
pub mod wallet;
