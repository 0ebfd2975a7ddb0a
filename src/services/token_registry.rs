use log::info;

use crate::models::TokenMetadata;

/// In-memory token list served to the dashboard, loaded once from configuration
#[derive(Debug, Default, Clone)]
pub struct TokenRegistry {
    tokens: Vec<TokenMetadata>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn from_tokens(tokens: Vec<TokenMetadata>) -> Self {
        let mut registry = Self::new();
        for token in tokens {
            registry.add_token(token);
        }
        registry
    }

    /// Insert a token, replacing any existing entry with the same chain and address
    pub fn add_token(&mut self, token: TokenMetadata) {
        info!("Token {}", token);
        self.remove_token(token.chain_id, &token.address);
        self.tokens.push(token);
    }

    pub fn remove_token(&mut self, chain_id: u64, address: &str) -> Option<TokenMetadata> {
        let index = self
            .tokens
            .iter()
            .position(|t| t.chain_id == chain_id && t.matches_address(address))?;
        Some(self.tokens.remove(index))
    }

    pub fn get_token(&self, chain_id: u64, address: &str) -> Option<&TokenMetadata> {
        self.tokens
            .iter()
            .find(|t| t.chain_id == chain_id && t.matches_address(address))
    }

    pub fn get_all_tokens(&self) -> Vec<&TokenMetadata> {
        self.tokens.iter().collect()
    }

    pub fn get_tokens_by_chain_id(&self, chain_id: u64) -> Vec<&TokenMetadata> {
        self.tokens.iter().filter(|t| t.chain_id == chain_id).collect()
    }

    pub fn count_tokens_by_chain_id(&self, chain_id: u64) -> usize {
        self.tokens.iter().filter(|t| t.chain_id == chain_id).count()
    }

    /// Get total token count
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
