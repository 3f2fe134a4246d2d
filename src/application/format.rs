//! Notice builders for transaction alerts and command replies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{color, format_ltc, format_usd, to_ltc, Field, Notice, TxRecord, Usd};

/// Builds explorer links for transaction hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxLinks {
    base: String,
}

impl TxLinks {
    /// `base` is the explorer's transaction page prefix, e.g.
    /// `https://live.blockcypher.com/ltc/tx`.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn tx_url(&self, hash: &str) -> String {
        format!("{}/{hash}", self.base)
    }
}

/// Incoming transaction ready to be announced.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionAlert<'a> {
    pub hash: &'a str,
    pub ltc_amount: Decimal,
    pub usd_amount: Usd,
    pub sender: &'a str,
    pub price: Usd,
}

/// Notice announcing a newly received transaction.
#[must_use]
pub fn transaction_notice(
    links: &TxLinks,
    alert: &TransactionAlert<'_>,
    at: DateTime<Utc>,
) -> Notice {
    Notice::new("💰 New LTC Transaction", color::GREEN)
        .field(Field::new("Hash").push_link(alert.hash, links.tx_url(alert.hash)))
        .field(Field::text(
            "Amount",
            format!(
                "{} LTC ({})",
                format_ltc(alert.ltc_amount),
                format_usd(alert.usd_amount)
            ),
        ))
        .field(Field::text("Sent From", alert.sender))
        .field(Field::text("LTC Price", format_usd(alert.price)))
        .with_timestamp(at)
}

/// Notice describing the wallet balance and its USD value.
#[must_use]
pub fn balance_notice(balance_ltc: Decimal, usd_value: Usd, price: Usd) -> Notice {
    Notice::new("🏦 Wallet Balance", color::BLUE)
        .field(Field::text("LTC", format!("{} LTC", format_ltc(balance_ltc))))
        .field(Field::text("USD", format_usd(usd_value)))
        .field(Field::text("LTC Price", format_usd(price)))
}

/// Notice listing recent transactions with the amount `address` received in each.
///
/// Amounts are shown as-is, so outbound transactions appear as zero.
#[must_use]
pub fn transactions_notice(
    links: &TxLinks,
    address: &str,
    transactions: &[TxRecord],
    count: usize,
) -> Notice {
    transactions.iter().fold(
        Notice::new(format!("📜 Last {count} Transactions"), color::PURPLE),
        |notice, tx| {
            let received = to_ltc(tx.received_by(address));
            notice.field(
                Field::new(tx.short_hash())
                    .push_text(format!("{} LTC", format_ltc(received)))
                    .push_line_break()
                    .push_link("View", links.tx_url(&tx.hash)),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Span, TxOutput};
    use rust_decimal_macros::dec;

    fn links() -> TxLinks {
        TxLinks::new("https://live.blockcypher.com/ltc/tx/")
    }

    #[test]
    fn tx_url_joins_without_double_slash() {
        assert_eq!(
            links().tx_url("abc"),
            "https://live.blockcypher.com/ltc/tx/abc"
        );
    }

    #[test]
    fn transaction_notice_has_fixed_schema() {
        let alert = TransactionAlert {
            hash: "deadbeef",
            ltc_amount: dec!(1.5),
            usd_amount: dec!(120),
            sender: "LSender",
            price: dec!(80),
        };
        let at = Utc::now();
        let notice = transaction_notice(&links(), &alert, at);

        assert_eq!(notice.title, "💰 New LTC Transaction");
        assert_eq!(notice.color, 0x00FF00);
        assert_eq!(notice.timestamp, Some(at));

        let names: Vec<_> = notice.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Hash", "Amount", "Sent From", "LTC Price"]);
        assert_eq!(
            notice.fields[0].value,
            vec![Span::Link {
                label: "deadbeef".into(),
                url: "https://live.blockcypher.com/ltc/tx/deadbeef".into(),
            }]
        );
        assert_eq!(notice.fields[1].plain_value(), "1.50000000 LTC ($120.00)");
        assert_eq!(notice.fields[2].plain_value(), "LSender");
        assert_eq!(notice.fields[3].plain_value(), "$80.00");
    }

    #[test]
    fn balance_notice_formats_amounts() {
        let notice = balance_notice(dec!(2.5), dec!(200), dec!(80));

        assert_eq!(notice.title, "🏦 Wallet Balance");
        assert_eq!(notice.fields[0].plain_value(), "2.50000000 LTC");
        assert_eq!(notice.fields[1].plain_value(), "$200.00");
        assert_eq!(notice.fields[2].plain_value(), "$80.00");
    }

    #[test]
    fn transactions_notice_lists_each_entry() {
        let txs = vec![
            TxRecord {
                hash: "aaaaaaaaaaaaaaaa".into(),
                inputs: vec![],
                outputs: vec![TxOutput {
                    addresses: vec!["LMe".into()],
                    value: 100_000_000,
                }],
            },
            TxRecord {
                hash: "bbbbbbbbbbbbbbbb".into(),
                inputs: vec![],
                outputs: vec![TxOutput {
                    addresses: vec!["LOther".into()],
                    value: 5,
                }],
            },
        ];

        let notice = transactions_notice(&links(), "LMe", &txs, 2);

        assert_eq!(notice.title, "📜 Last 2 Transactions");
        assert_eq!(notice.fields.len(), 2);
        assert_eq!(notice.fields[0].name, "aaaaaaaaaa...");
        assert_eq!(notice.fields[0].plain_value(), "1.00000000 LTC\nView");
        assert_eq!(notice.fields[1].plain_value(), "0.00000000 LTC\nView");
    }
}
