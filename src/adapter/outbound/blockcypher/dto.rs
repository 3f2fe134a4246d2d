//! BlockCypher response types.
//!
//! Only the fields the watcher consumes are modelled. `addresses` is absent
//! or null for coinbase inputs and non-standard outputs.

use serde::Deserialize;

use crate::domain::{Litoshis, TxInput, TxOutput, TxRecord, WalletSnapshot};

/// Response of `GET /addrs/{address}/full`.
#[derive(Debug, Deserialize)]
pub struct AddressFullResponse {
    #[serde(default)]
    pub balance: Litoshis,
    #[serde(default)]
    pub txs: Option<Vec<TxDto>>,
}

#[derive(Debug, Deserialize)]
pub struct TxDto {
    pub hash: String,
    #[serde(default)]
    pub inputs: Vec<InputDto>,
    #[serde(default)]
    pub outputs: Vec<OutputDto>,
}

#[derive(Debug, Deserialize)]
pub struct InputDto {
    #[serde(default)]
    pub addresses: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct OutputDto {
    #[serde(default)]
    pub value: Litoshis,
    #[serde(default)]
    pub addresses: Option<Vec<String>>,
}

impl From<AddressFullResponse> for WalletSnapshot {
    fn from(response: AddressFullResponse) -> Self {
        Self {
            balance: response.balance,
            transactions: response
                .txs
                .unwrap_or_default()
                .into_iter()
                .map(TxRecord::from)
                .collect(),
        }
    }
}

impl From<TxDto> for TxRecord {
    fn from(tx: TxDto) -> Self {
        Self {
            hash: tx.hash,
            inputs: tx
                .inputs
                .into_iter()
                .map(|input| TxInput {
                    addresses: input.addresses.unwrap_or_default(),
                })
                .collect(),
            outputs: tx
                .outputs
                .into_iter()
                .map(|output| TxOutput {
                    addresses: output.addresses.unwrap_or_default(),
                    value: output.value,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_address_response() {
        let json = r#"{
            "address": "LWatched",
            "balance": 250000000,
            "n_tx": 2,
            "txs": [
                {
                    "hash": "newest",
                    "inputs": [{"addresses": ["LSender"], "output_value": 300000000}],
                    "outputs": [
                        {"value": 250000000, "addresses": ["LWatched"]},
                        {"value": 40000000, "addresses": ["LSender"]},
                        {"value": 0, "addresses": null, "script_type": "null-data"}
                    ]
                },
                {
                    "hash": "older",
                    "inputs": [{"script_type": "coinbase"}],
                    "outputs": []
                }
            ]
        }"#;

        let response: AddressFullResponse = serde_json::from_str(json).unwrap();
        let snapshot = WalletSnapshot::from(response);

        assert_eq!(snapshot.balance, 250_000_000);
        assert_eq!(snapshot.transactions.len(), 2);

        let newest = &snapshot.transactions[0];
        assert_eq!(newest.hash, "newest");
        assert_eq!(newest.sender(), "LSender");
        assert_eq!(newest.received_by("LWatched"), 250_000_000);
        assert!(newest.outputs[2].addresses.is_empty());

        assert_eq!(snapshot.transactions[1].sender(), "Unknown");
    }

    #[test]
    fn missing_txs_yield_empty_snapshot() {
        let response: AddressFullResponse =
            serde_json::from_str(r#"{"address": "LWatched", "balance": 5}"#).unwrap();
        let snapshot = WalletSnapshot::from(response);

        assert_eq!(snapshot.balance, 5);
        assert!(snapshot.transactions.is_empty());
    }

    #[test]
    fn rejects_transaction_without_hash() {
        let json = r#"{"balance": 1, "txs": [{"inputs": []}]}"#;
        let result = serde_json::from_str::<AddressFullResponse>(json);
        assert!(result.is_err());
    }
}
