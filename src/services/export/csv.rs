use crate::models::Transaction;

pub const CSV_HEADER: &str = "Version,Timestamp,Type,Sender,Recipient,Amount,Status,Hash";

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub fn transaction_row(tx: &Transaction) -> String {
    [
        tx.version.as_str(),
        tx.timestamp.as_str(),
        tx.tx_type.as_str(),
        tx.sender.as_str(),
        tx.recipient.as_deref().unwrap_or_default(),
        tx.amount.as_deref().unwrap_or_default(),
        tx.status.as_str(),
        tx.hash.as_str(),
    ]
    .iter()
    .map(|field| quote(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Render transactions as CSV, one quoted row per transaction under a fixed header
pub fn transactions_to_csv(transactions: &[Transaction]) -> String {
    let mut csv = String::from(CSV_HEADER);
    for tx in transactions {
        csv.push('\n');
        csv.push_str(&transaction_row(tx));
    }
    csv
}
