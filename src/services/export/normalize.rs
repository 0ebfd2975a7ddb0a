use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::models::{
    format_units, normalize_address, Transaction, TransactionStatus, TransactionType,
};
use crate::providers::LedgerTransaction;

/// Decimals of the native coin; export amounts are raw argument values scaled by this
pub const NATIVE_DECIMALS: u8 = 8;
pub const AMOUNT_PRECISION: u8 = 4;

pub const UNKNOWN_ADDRESS: &str = "[Unknown]";
pub const CONTRACT_ADDRESS: &str = "[Contract]";

/// Object keys that may wrap an address inside structured arguments
const ADDRESS_FIELDS: [&str; 3] = ["inner", "address", "recipient"];

pub fn classify_transaction(function: &str) -> TransactionType {
    if function.contains("::transfer") {
        TransactionType::Transfer
    } else if function.contains("::swap") {
        TransactionType::Swap
    } else if function.contains("::stake") {
        TransactionType::Staking
    } else {
        TransactionType::Transaction
    }
}

pub fn normalize_recipient(argument: Option<&Value>) -> String {
    match argument {
        None | Some(Value::Null) => UNKNOWN_ADDRESS.to_string(),
        Some(Value::String(address)) if !address.trim().is_empty() => normalize_address(address),
        Some(Value::String(_)) => UNKNOWN_ADDRESS.to_string(),
        Some(Value::Object(fields)) => ADDRESS_FIELDS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(normalize_address)
            .unwrap_or_else(|| CONTRACT_ADDRESS.to_string()),
        Some(_) => CONTRACT_ADDRESS.to_string(),
    }
}

/// Parse a raw integer amount given as a JSON number, a decimal string or a
/// `0x`-prefixed hex string
pub fn parse_raw_amount(argument: &Value) -> Option<u128> {
    match argument {
        Value::Number(n) => n.as_u64().map(u128::from),
        Value::String(s) => {
            let s = s.trim();
            match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => u128::from_str_radix(hex, 16).ok(),
                None => s.parse::<u128>().ok(),
            }
        }
        _ => None,
    }
}

/// Amount in native units with four decimals, or an empty string when the
/// argument is absent or not an integer
pub fn format_amount(argument: Option<&Value>) -> String {
    argument
        .and_then(parse_raw_amount)
        .map(|raw| format_units(raw, NATIVE_DECIMALS, AMOUNT_PRECISION))
        .unwrap_or_default()
}

/// Microsecond ledger timestamp as an ISO-8601 UTC string
pub fn format_timestamp(micros: &str) -> String {
    micros
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_micros)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| micros.to_string())
}

fn compute_fee(gas_used: Option<&str>, gas_unit_price: Option<&str>) -> Option<String> {
    let used = gas_used?.parse::<u128>().ok()?;
    let price = gas_unit_price?.parse::<u128>().ok()?;
    let fee = used.checked_mul(price)?;
    Some(format_units(fee, NATIVE_DECIMALS, NATIVE_DECIMALS))
}

pub fn normalize_transaction(tx: &LedgerTransaction) -> Transaction {
    let (tx_type, recipient, amount) = match &tx.payload {
        Some(payload) => {
            let tx_type = payload
                .function
                .as_deref()
                .map(classify_transaction)
                .unwrap_or(TransactionType::Transaction);
            let amount = format_amount(payload.arguments.get(1));
            (
                tx_type,
                Some(normalize_recipient(payload.arguments.first())),
                (!amount.is_empty()).then_some(amount),
            )
        }
        None => (TransactionType::Transaction, None, None),
    };

    Transaction {
        version: tx.version.clone(),
        timestamp: tx
            .timestamp
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default(),
        tx_type,
        sender: tx
            .sender
            .as_deref()
            .map(normalize_address)
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        recipient,
        amount,
        status: TransactionStatus::from_success(tx.success),
        hash: tx.hash.clone(),
        fee: compute_fee(tx.gas_used.as_deref(), tx.gas_unit_price.as_deref()),
    }
}
