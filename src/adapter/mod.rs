//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: CLI and Telegram commands
//! - [`outbound`] - Driven side: explorer, price and webhook clients

pub mod inbound;
pub mod outbound;
