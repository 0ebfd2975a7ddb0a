use log::debug;

use crate::{handlers::token::dto::TokenResponse, services::TokenRegistry};

/// Service layer for token-related business logic
pub struct TokenService;

impl TokenService {
    /// Get all tokens
    pub fn get_all_tokens(registry: &TokenRegistry) -> Vec<TokenResponse> {
        debug!("Fetching all tokens");
        registry
            .get_all_tokens()
            .into_iter()
            .map(TokenResponse::from)
            .collect()
    }

    /// Get tokens by chain ID
    ///
    /// # Arguments
    /// * `registry` - Configured token list
    /// * `chain_id` - The chain ID to filter by
    pub fn get_tokens_by_chain_id(registry: &TokenRegistry, chain_id: u64) -> Vec<TokenResponse> {
        debug!("Fetching tokens with chain_id: {}", chain_id);
        registry
            .get_tokens_by_chain_id(chain_id)
            .into_iter()
            .map(TokenResponse::from)
            .collect()
    }

    /// Get a token by chain ID and coin type or FA address
    ///
    /// # Returns
    /// * `Some(TokenResponse)` - Token if listed
    /// * `None` - Token is not in the registry
    pub fn get_token_by_address(
        registry: &TokenRegistry,
        chain_id: u64,
        address: &str,
    ) -> Option<TokenResponse> {
        debug!(
            "Fetching token with chain_id: {}, address: {}",
            chain_id, address
        );
        registry
            .get_token(chain_id, address)
            .map(TokenResponse::from)
    }

    /// Count tokens by chain ID
    pub fn count_tokens_by_chain_id(registry: &TokenRegistry, chain_id: u64) -> usize {
        debug!("Counting tokens with chain_id: {}", chain_id);
        registry.count_tokens_by_chain_id(chain_id)
    }
}
