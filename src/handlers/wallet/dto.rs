use serde::Serialize;

use crate::models::{WalletStats, WalletStatsDisplay};

/// Response model for the wallet stats endpoint
#[derive(Debug, Serialize)]
pub struct WalletStatsResponse {
    pub address: String,
    pub stats: WalletStats,
    pub display: WalletStatsDisplay,
}
