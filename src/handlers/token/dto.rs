use serde::Serialize;

use crate::models::TokenMetadata;

/// Response model for token API endpoints
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub chain_id: u64,
    pub address: String,
    pub fa_address: Option<String>,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub coingecko_id: Option<String>,
    pub coinmarketcap_id: Option<String>,
}

impl From<&TokenMetadata> for TokenResponse {
    fn from(token: &TokenMetadata) -> Self {
        Self {
            chain_id: token.chain_id,
            address: token.address.clone(),
            fa_address: token.fa_address.clone(),
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            decimals: token.decimals,
            logo_url: token.logo_url.clone(),
            website_url: token.website_url.clone(),
            coingecko_id: token.coingecko_id.clone(),
            coinmarketcap_id: token.coinmarketcap_id.clone(),
        }
    }
}
