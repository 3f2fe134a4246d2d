//! Wallet snapshot and transaction records.
//!
//! A [`WalletSnapshot`] is fetched fresh on every poll or command and never
//! cached. Transactions are ordered newest first, as the explorer returns them.

use crate::error::FetchError;

use super::money::Litoshis;

/// Sender label used when a transaction's first input carries no address.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Balance and recent transactions for one address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletSnapshot {
    /// Confirmed balance in litoshis.
    pub balance: Litoshis,
    /// Transactions touching the address, newest first.
    pub transactions: Vec<TxRecord>,
}

impl WalletSnapshot {
    /// The newest transaction, or [`FetchError::Empty`] if there is none.
    pub fn newest(&self) -> Result<&TxRecord, FetchError> {
        self.transactions.first().ok_or(FetchError::Empty)
    }

    /// Up to `count` of the newest transactions, preserving order.
    #[must_use]
    pub fn recent(&self, count: usize) -> &[TxRecord] {
        let end = count.min(self.transactions.len());
        &self.transactions[..end]
    }
}

/// A single transaction. Identity is the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRecord {
    pub hash: String,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxInput {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxOutput {
    pub addresses: Vec<String>,
    pub value: Litoshis,
}

impl TxRecord {
    /// Sum of output values paying `address`.
    ///
    /// Zero when the address only appears on the input side.
    #[must_use]
    pub fn received_by(&self, address: &str) -> Litoshis {
        self.outputs
            .iter()
            .filter(|output| output.addresses.iter().any(|a| a == address))
            .map(|output| output.value)
            .fold(0, Litoshis::saturating_add)
    }

    /// First address of the first input, or [`UNKNOWN_SENDER`].
    #[must_use]
    pub fn sender(&self) -> &str {
        self.inputs
            .first()
            .and_then(|input| input.addresses.first())
            .map_or(UNKNOWN_SENDER, String::as_str)
    }

    /// Hash shortened for list display: first ten characters plus `...`.
    #[must_use]
    pub fn short_hash(&self) -> String {
        let head: String = self.hash.chars().take(10).collect();
        format!("{head}...")
    }
}
