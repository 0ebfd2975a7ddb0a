use serde::Serialize;

use crate::models::Transaction;

/// Response model for the JSON transaction history endpoint
#[derive(Debug, Serialize)]
pub struct TransactionHistoryResponse {
    pub address: String,
    pub count: usize,
    pub transactions: Vec<Transaction>,
}
