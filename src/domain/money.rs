//! Monetary types for on-chain amounts and USD valuation.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// On-chain amount in minor units (1 LTC = 100,000,000 litoshis).
pub type Litoshis = u64;

/// USD price or value represented as a Decimal for precision.
pub type Usd = Decimal;

/// Number of decimal places between litoshis and LTC.
pub const LTC_DECIMALS: u32 = 8;

/// Convert litoshis to whole LTC, keeping all eight decimal places.
#[must_use]
pub fn to_ltc(amount: Litoshis) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(amount), LTC_DECIMALS)
}

/// USD value of an LTC amount at the given price.
///
/// A zero price (unknown quote) yields a zero value. A product that does not
/// fit in a `Decimal` is treated the same way.
#[must_use]
pub fn usd_value(ltc: Decimal, price: Usd) -> Usd {
    ltc.checked_mul(price).unwrap_or_else(|| {
        warn!(%ltc, %price, "USD value overflowed; reporting zero");
        Decimal::ZERO
    })
}

/// Render an LTC amount with eight decimal places, e.g. `2.50000000`.
#[must_use]
pub fn format_ltc(ltc: Decimal) -> String {
    format!("{:.8}", ltc.round_dp(LTC_DECIMALS))
}

/// Render a USD amount with two decimal places, e.g. `$200.00`.
#[must_use]
pub fn format_usd(usd: Usd) -> String {
    let rounded = usd.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}
