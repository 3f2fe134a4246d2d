//! Wallet domain types: snapshots, amounts and chat notices.

pub mod money;
pub mod notice;
pub mod wallet;

pub use money::{format_ltc, format_usd, to_ltc, usd_value, Litoshis, Usd};
pub use notice::{color, Field, Notice, Span};
pub use wallet::{TxInput, TxOutput, TxRecord, WalletSnapshot, UNKNOWN_SENDER};
