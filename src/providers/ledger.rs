use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only view of the ledger REST API needed for history exports
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Current sequence number of `address`, used as its transaction count
    async fn get_sequence_number(&self, address: &str) -> anyhow::Result<u64>;

    /// Up to `limit` account transactions starting at sequence number `offset`,
    /// ascending by sequence number
    async fn get_account_transactions(
        &self,
        address: &str,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<LedgerTransaction>>;
}

/// Account resource as returned by `GET /accounts/{address}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub sequence_number: String,
    #[serde(default)]
    pub authentication_key: Option<String>,
}

/// Committed transaction as returned by `GET /accounts/{address}/transactions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerTransaction {
    pub version: String,
    pub hash: String,
    /// Microseconds since the unix epoch
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub vm_status: Option<String>,
    #[serde(default)]
    pub gas_used: Option<String>,
    #[serde(default)]
    pub gas_unit_price: Option<String>,
    #[serde(default)]
    pub payload: Option<TransactionPayload>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPayload {
    #[serde(rename = "type", default)]
    pub payload_type: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_transaction() {
        let raw = r#"{
            "version": "1203",
            "hash": "0xfeed",
            "timestamp": "1700000000123456",
            "sender": "0x5",
            "success": true,
            "vm_status": "Executed successfully",
            "gas_used": "7",
            "gas_unit_price": "100",
            "sequence_number": "3",
            "payload": {
                "type": "entry_function_payload",
                "function": "0x1::aptos_account::transfer",
                "type_arguments": [],
                "arguments": ["0x9", "100000000"]
            }
        }"#;

        let tx: LedgerTransaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.version, "1203");
        assert!(tx.success);
        let payload = tx.payload.unwrap();
        assert_eq!(payload.function.as_deref(), Some("0x1::aptos_account::transfer"));
        assert_eq!(payload.arguments.len(), 2);
    }

    #[test]
    fn test_deserialize_minimal_transaction() {
        let tx: LedgerTransaction =
            serde_json::from_str(r#"{ "version": "1", "hash": "0x1" }"#).unwrap();
        assert!(!tx.success);
        assert!(tx.payload.is_none());
        assert!(tx.sender.is_none());
    }
}
