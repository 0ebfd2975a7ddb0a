use actix_web::{web, HttpResponse};
use log::{error, info};

use crate::{
    errors::ApiError,
    handlers::{validation::validate_account_address, wallet::service::WalletService},
    providers::WalletStatsProvider,
};

/// GET /wallets/{address}/stats - Returns aggregate statistics for a wallet
///
/// # Arguments
/// * `provider` - Wallet stats source
/// * `path` - Path parameters containing the account address
///
/// # Returns
/// JSON object of WalletStatsResponse, or an inline error message when the
/// indexing API cannot be reached
pub async fn get_wallet_stats_handler(
    provider: web::Data<dyn WalletStatsProvider>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let address = validate_account_address(&path.into_inner())?;
    info!("Handling GET /wallets/{}/stats request", address);

    match WalletService::get_wallet_stats(provider.get_ref(), &address).await {
        Ok(stats) => {
            info!("Successfully retrieved wallet stats for {}", address);
            Ok(HttpResponse::Ok().json(stats))
        }
        Err(e) => {
            error!("Failed to retrieve wallet stats: {:#}", e);
            Err(ApiError::UpstreamError(format!(
                "Failed to load wallet stats: {}",
                e
            )))
        }
    }
}
