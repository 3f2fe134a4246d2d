//! Wallet data ports: block explorer and price quote sources.

use async_trait::async_trait;

use crate::domain::{Usd, WalletSnapshot};
use crate::error::FetchError;

/// Source of balance and transaction history for an address.
///
/// Implementations issue a single bounded request per call and never retry;
/// a failure means "skip this cycle".
#[async_trait]
pub trait WalletSource: Send + Sync {
    /// Fetch the full address info (balance and recent transactions).
    async fn fetch_wallet_info(&self, address: &str) -> Result<WalletSnapshot, FetchError>;
}

/// Source of the current USD price of the watched asset.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current USD price.
    async fn fetch_quote(&self) -> Result<Usd, FetchError>;
}
