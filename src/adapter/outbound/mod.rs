//! Outbound adapters (driven side).

pub mod blockcypher;
pub mod coingecko;
pub mod notifier;
