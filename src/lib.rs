//! ltcwatch - Litecoin address watcher.
//!
//! Polls one address on a block explorer every minute, announces incoming
//! transactions to a chat webhook, and answers balance and history commands
//! from a Telegram bot or the command line.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Wallet snapshots, money math and the platform-neutral notice model
//! - [`port`] - Traits for wallet data, price quotes and notifiers
//! - [`application`] - The transaction watcher, its scheduler and the wallet queries
//! - [`adapter`] - BlockCypher, CoinGecko and webhook clients; CLI and Telegram inbound
//! - [`infrastructure`] - Configuration loading and runtime wiring
//! - [`app`] - Process orchestration
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Chat commands via a Telegram bot
//!
//! # Example
//!
//! ```no_run
//! use ltcwatch::app::App;
//! use ltcwatch::infrastructure::config::settings::Config;
//!
//! # async fn run() -> ltcwatch::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! config.init_logging();
//! App::run(config).await
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
