use log::debug;

use crate::{handlers::wallet::dto::WalletStatsResponse, providers::WalletStatsProvider};

/// Service layer for wallet-related business logic
pub struct WalletService;

impl WalletService {
    /// Get aggregate statistics for a wallet
    ///
    /// # Arguments
    /// * `provider` - Wallet stats source
    /// * `address` - Normalized account address
    ///
    /// # Returns
    /// * `Ok(WalletStatsResponse)` - Raw stats plus their rendered form
    /// * `Err(anyhow::Error)` - Error if the indexing API call fails
    pub async fn get_wallet_stats(
        provider: &dyn WalletStatsProvider,
        address: &str,
    ) -> anyhow::Result<WalletStatsResponse> {
        debug!("Fetching wallet stats for {}", address);

        let stats = provider.fetch_wallet_stats(address).await?;
        let display = stats.display();

        Ok(WalletStatsResponse {
            address: address.to_string(),
            stats,
            display,
        })
    }
}
