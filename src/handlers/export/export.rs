use actix_web::{http::header, web, HttpResponse};
use log::{error, info};

use crate::{
    errors::ApiError,
    handlers::{auth::ApiKey, validation::validate_account_address},
    services::export::{ExportMessage, ExportRequest, ExportWorker, TransactionExporter},
};

use super::dto::TransactionHistoryResponse;

/// POST /export - Runs a transaction history export for a wallet
///
/// # Arguments
/// * `worker` - Background export worker
/// * `body` - ExportRequest carrying `walletAddress`
///
/// # Returns
/// The worker's terminal ExportMessage as JSON, or 204 when no address was given
pub async fn export_transactions_handler(
    _api_key: ApiKey,
    worker: web::Data<ExportWorker>,
    body: web::Json<ExportRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut request = body.into_inner();
    info!(
        "Handling POST /export request for {:?}",
        request.wallet_address
    );

    // The address ends up in the ledger request path
    if !request.wallet_address.trim().is_empty() {
        request.wallet_address = validate_account_address(&request.wallet_address)?;
    }

    match worker.submit(request).await? {
        Some(message) => {
            if let ExportMessage::Error { ref error } = message {
                error!("Export finished with error: {}", error);
            } else {
                info!("Export completed");
            }
            Ok(HttpResponse::Ok().json(message))
        }
        None => {
            info!("Empty wallet address, nothing to export");
            Ok(HttpResponse::NoContent().finish())
        }
    }
}

/// GET /wallets/{address}/transactions/export - Downloads a wallet's history as CSV
///
/// # Arguments
/// * `worker` - Background export worker
/// * `path` - Path parameters containing the account address
///
/// # Returns
/// `text/csv` attachment named `transactions_{address}.csv`
pub async fn download_transactions_csv_handler(
    _api_key: ApiKey,
    worker: web::Data<ExportWorker>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let address = validate_account_address(&path.into_inner())?;
    info!("Handling GET /wallets/{}/transactions/export request", address);

    let request = ExportRequest {
        wallet_address: address.clone(),
    };

    match worker.submit(request).await? {
        Some(ExportMessage::Completed { csv_content }) => {
            info!("Export completed for {}", address);
            Ok(HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"transactions_{}.csv\"", address),
                ))
                .body(csv_content))
        }
        Some(ExportMessage::Error { error }) => {
            error!("Export failed for {}: {}", address, error);
            Err(ApiError::UpstreamError(error))
        }
        None => Err(ApiError::BadRequest("Wallet address is required".to_string())),
    }
}

/// GET /wallets/{address}/transactions - Full transaction history as JSON
///
/// Same history as the CSV export, including the gas fee of each transaction.
pub async fn get_transaction_history_handler(
    _api_key: ApiKey,
    exporter: web::Data<TransactionExporter>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let address = validate_account_address(&path.into_inner())?;
    info!("Handling GET /wallets/{}/transactions request", address);

    let transactions = exporter.fetch_history(&address).await?;

    Ok(HttpResponse::Ok().json(TransactionHistoryResponse {
        address,
        count: transactions.len(),
        transactions,
    }))
}
