//! BlockCypher block explorer adapter.
//!
//! Reads balance and transaction history from the "full address" endpoint.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::BlockCypherClient;
pub use settings::ExplorerConfig;
