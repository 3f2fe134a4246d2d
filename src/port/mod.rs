//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  watcher + queries      ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌──────────┐           ┌─────────────┐              ┌───────────┐
//! │ Explorer │           │    Price    │              │ Notifier  │
//! │ Adapter  │           │   Adapter   │              │  Adapter  │
//! └──────────┘           └─────────────┘              └───────────┘
//! ```
//!
//! - [`WalletSource`] - Balance and transaction history
//! - [`PriceSource`] - USD quote for the watched asset
//! - [`Notifier`] - Outbound notices (webhook, logging)

pub mod outbound;

pub use outbound::notifier::{LogNotifier, Notifier, NullNotifier};
pub use outbound::wallet::{PriceSource, WalletSource};
