//! Price lookup with the zero-on-failure convention.

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::Usd;
use crate::port::PriceSource;

/// Fetch the current price, substituting zero when the quote fails.
///
/// Zero means "unknown price" and flows into USD values as zero.
pub async fn price_or_zero(prices: &dyn PriceSource) -> Usd {
    match prices.fetch_quote().await {
        Ok(price) => price,
        Err(err) => {
            warn!(error = %err, "Price fetch failed, using 0");
            Decimal::ZERO
        }
    }
}
