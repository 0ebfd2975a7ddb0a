use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse transaction category derived from the entry function name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Transfer,
    Swap,
    Staking,
    Transaction,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "Transfer",
            TransactionType::Swap => "Swap",
            TransactionType::Staking => "Staking",
            TransactionType::Transaction => "Transaction",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl TransactionStatus {
    pub fn from_success(success: bool) -> Self {
        if success {
            TransactionStatus::Success
        } else {
            TransactionStatus::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "Success",
            TransactionStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flattened account transaction as shown in history views and exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: String,
    pub timestamp: String,
    pub tx_type: TransactionType,
    pub sender: String,
    pub recipient: Option<String>,
    pub amount: Option<String>,
    pub status: TransactionStatus,
    pub hash: String,
    pub fee: Option<String>,
}
