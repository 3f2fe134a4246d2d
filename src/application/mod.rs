//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the watcher's use cases.

pub mod format;
pub mod query;
pub mod quote;
pub mod scheduler;
pub mod watcher;

pub use format::TxLinks;
pub use query::{Reply, WalletQueries};
pub use scheduler::{run_poll_loop, POLL_INTERVAL_SECS};
pub use watcher::{TickOutcome, TransactionWatcher};
