use serde::{Deserialize, Serialize};
use std::fmt;

use super::utils::address_key;

/// Display metadata for a token listed on the dashboard
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenMetadata {
    pub chain_id: u64,
    /// Coin type or primary address
    pub address: String,
    /// Fungible-asset address, when the token is also exposed as one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa_address: Option<String>,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coinmarketcap_id: Option<String>,
}

impl TokenMetadata {
    pub fn new(chain_id: u64, address: String, name: String, symbol: String, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            fa_address: None,
            name,
            symbol,
            decimals,
            logo_url: None,
            website_url: None,
            coingecko_id: None,
            coinmarketcap_id: None,
        }
    }

    /// True when `address` names this token by either its coin type or FA address
    pub fn matches_address(&self, address: &str) -> bool {
        let key = address_key(address);
        address_key(&self.address) == key
            || self
                .fa_address
                .as_deref()
                .map(|fa| address_key(fa) == key)
                .unwrap_or(false)
    }
}

impl fmt::Display for TokenMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) on chain {} at {}",
            self.name, self.symbol, self.chain_id, self.address
        )
    }
}
