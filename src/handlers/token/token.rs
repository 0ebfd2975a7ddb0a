use actix_web::{web, HttpResponse};
use log::info;

use crate::{errors::ApiError, handlers::token::service::TokenService, services::TokenRegistry};

/// GET /tokens - Returns all tokens
///
/// # Returns
/// JSON array of TokenResponse objects containing token information
pub async fn get_tokens_handler(
    registry: web::Data<TokenRegistry>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /tokens request");

    let tokens = TokenService::get_all_tokens(&registry);
    info!("Successfully retrieved {} tokens", tokens.len());
    Ok(HttpResponse::Ok().json(tokens))
}

/// GET /tokens/chain/{chain_id} - Returns tokens by chain ID
///
/// # Arguments
/// * `registry` - Configured token list
/// * `path` - Path parameters containing chain_id
///
/// # Returns
/// JSON array of TokenResponse objects
pub async fn get_tokens_by_chain_id_handler(
    registry: web::Data<TokenRegistry>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let chain_id = path.into_inner();
    info!("Handling GET /tokens/chain/{} request", chain_id);

    let tokens = TokenService::get_tokens_by_chain_id(&registry, chain_id);
    info!("Successfully retrieved {} tokens", tokens.len());
    Ok(HttpResponse::Ok().json(tokens))
}

/// GET /tokens/chain/{chain_id}/address/{address} - Returns a specific token by chain ID and address
///
/// # Arguments
/// * `registry` - Configured token list
/// * `path` - Path parameters containing chain_id and address (coin type or FA address)
///
/// # Returns
/// JSON object of TokenResponse containing token information
pub async fn get_token_by_address_handler(
    registry: web::Data<TokenRegistry>,
    path: web::Path<(u64, String)>,
) -> Result<HttpResponse, ApiError> {
    let (chain_id, address) = path.into_inner();
    info!(
        "Handling GET /tokens/chain/{}/address/{} request",
        chain_id, address
    );

    match TokenService::get_token_by_address(&registry, chain_id, &address) {
        Some(token) => {
            info!("Successfully retrieved token");
            Ok(HttpResponse::Ok().json(token))
        }
        None => {
            info!("Token not found");
            Err(ApiError::NotFound(format!(
                "Token with chain_id {} and address {} not found",
                chain_id, address
            )))
        }
    }
}

/// GET /tokens/chain/{chain_id}/count - Returns count of tokens by chain ID
///
/// # Returns
/// JSON object with count
pub async fn count_tokens_by_chain_id_handler(
    registry: web::Data<TokenRegistry>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let chain_id = path.into_inner();
    info!("Handling GET /tokens/chain/{}/count request", chain_id);

    let count = TokenService::count_tokens_by_chain_id(&registry, chain_id);
    info!("Successfully retrieved token count: {}", count);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "count": count })))
}
