#![allow(dead_code)]

pub mod recording_notifier;
pub mod scripted_sources;

use ltcwatch::domain::{TxInput, TxOutput, TxRecord, WalletSnapshot};

pub const WATCHED: &str = "LWatchedAddress1";
pub const SENDER: &str = "LSenderAddress9";
pub const TX_URL: &str = "https://live.blockcypher.com/ltc/tx";

/// Transaction paying `value` litoshis to the watched address.
pub fn incoming(hash: &str, value: u64) -> TxRecord {
    TxRecord {
        hash: hash.to_string(),
        inputs: vec![TxInput {
            addresses: vec![SENDER.to_string()],
        }],
        outputs: vec![
            TxOutput {
                addresses: vec![WATCHED.to_string()],
                value,
            },
            TxOutput {
                addresses: vec![SENDER.to_string()],
                value: 1_000,
            },
        ],
    }
}

/// Transaction spending from the watched address to someone else.
pub fn outgoing(hash: &str, value: u64) -> TxRecord {
    TxRecord {
        hash: hash.to_string(),
        inputs: vec![TxInput {
            addresses: vec![WATCHED.to_string()],
        }],
        outputs: vec![TxOutput {
            addresses: vec![SENDER.to_string()],
            value,
        }],
    }
}

pub fn snapshot(balance: u64, transactions: Vec<TxRecord>) -> WalletSnapshot {
    WalletSnapshot {
        balance,
        transactions,
    }
}
