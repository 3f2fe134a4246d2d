//! CoinGecko price quote adapter.

pub mod client;
pub mod settings;

pub use client::CoinGeckoClient;
pub use settings::PriceConfig;
