use anyhow::{anyhow, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{TokenMetadata, MAX_DECIMALS};
use crate::services::export::DEFAULT_PAGE_SIZE;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub ledger: LedgerConfig,
    pub indexer: IndexerConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenMetadata>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
}

/// Ledger REST endpoint used for account and transaction lookups
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LedgerConfig {
    pub rpc_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Hosted GraphQL indexing API serving wallet statistics
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IndexerConfig {
    pub graphql_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8081,
                api_key: None,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string(), "POST".to_string()],
                allowed_headers: vec![
                    "Authorization".to_string(),
                    "X-API-Key".to_string(),
                    "Accept".to_string(),
                    "Content-Type".to_string(),
                ],
                supports_credentials: true,
            },
            ledger: LedgerConfig {
                rpc_url: "https://mainnet.movementnetwork.xyz/v1".to_string(),
                page_size: DEFAULT_PAGE_SIZE,
                request_timeout_ms: default_timeout_ms(),
            },
            indexer: IndexerConfig {
                graphql_url: "http://localhost:8080/graphql".to_string(),
                api_key: None,
                api_secret: None,
                request_timeout_ms: default_timeout_ms(),
            },
            tokens: Vec::new(),
        }
    }
}

impl LedgerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.is_empty() {
            return Err(anyhow!("Ledger RPC URL not configured"));
        }
        url::Url::parse(&self.rpc_url)
            .map_err(|e| anyhow!("Invalid ledger RPC URL '{}': {}", self.rpc_url, e))?;

        if self.page_size == 0 {
            return Err(anyhow!("Ledger page size must be greater than zero"));
        }

        Ok(())
    }
}

impl IndexerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.graphql_url.is_empty() {
            return Err(anyhow!("Indexer GraphQL URL not configured"));
        }
        url::Url::parse(&self.graphql_url)
            .map_err(|e| anyhow!("Invalid indexer GraphQL URL '{}': {}", self.graphql_url, e))?;

        Ok(())
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading config from file {}", path.display());
        let mut config = match Self::load_from_file(path) {
            Ok(config) => {
                info!("Config loaded from file");
                config
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                // Fall back to environment variables or defaults
                info!("Falling back to environment variables or defaults");
                Self::from_env()
            }
        };

        // Indexer credentials are kept out of config files
        config.apply_credentials_from_env();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.ledger.validate()?;
        self.indexer.validate()?;

        if let Some(token) = self.tokens.iter().find(|t| t.decimals > MAX_DECIMALS) {
            return Err(anyhow!(
                "Token {} has {} decimals, at most {} are supported",
                token.symbol,
                token.decimals,
                MAX_DECIMALS
            ));
        }

        Ok(())
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        // Override with environment variables if present
        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins =
                origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Ok(api_key) = std::env::var("API_KEY") {
            config.server.api_key = Some(api_key);
        }

        if let Ok(rpc_url) = std::env::var("LEDGER_RPC_URL") {
            config.ledger.rpc_url = rpc_url;
        }

        if let Ok(graphql_url) = std::env::var("INDEXER_GRAPHQL_URL") {
            config.indexer.graphql_url = graphql_url;
        }

        config.apply_credentials_from_env();
        config
    }

    fn apply_credentials_from_env(&mut self) {
        if let Ok(api_key) = std::env::var("INDEXER_API_KEY") {
            self.indexer.api_key = Some(api_key);
        }

        if let Ok(api_secret) = std::env::var("INDEXER_API_SECRET") {
            self.indexer.api_secret = Some(api_secret);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.ledger.page_size, 20);
        assert!(config.tokens.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("SERVER_PORT", "9090");
        std::env::set_var("LEDGER_RPC_URL", "http://127.0.0.1:30731/v1");

        let config = Config::from_env();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.ledger.rpc_url, "http://127.0.0.1:30731/v1");

        // Clean up
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("LEDGER_RPC_URL");
    }

    #[test]
    fn test_config_from_toml() {
        let raw = r#"
            [server]
            host = "0.0.0.0"
            port = 8000

            [cors]
            allowed_origins = ["http://localhost:5173"]
            allowed_methods = ["GET"]
            allowed_headers = ["Content-Type"]
            supports_credentials = false

            [ledger]
            rpc_url = "https://testnet.movementnetwork.xyz/v1"

            [indexer]
            graphql_url = "https://indexer.example.com/graphql"

            [[tokens]]
            chain_id = 126
            address = "0x1::aptos_coin::AptosCoin"
            name = "Move Coin"
            symbol = "MOVE"
            decimals = 8
            coingecko_id = "movement"
        "#;

        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.ledger.page_size, 20);
        assert_eq!(config.ledger.request_timeout_ms, 10_000);
        assert_eq!(config.tokens.len(), 1);
        assert_eq!(config.tokens[0].symbol, "MOVE");
        assert_eq!(config.tokens[0].coingecko_id.as_deref(), Some("movement"));
        assert!(config.indexer.api_key.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.ledger.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.indexer.graphql_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_token_decimals() {
        let mut config = Config::default();
        config.tokens.push(TokenMetadata::new(
            126,
            "0xwide".to_string(),
            "Wide".to_string(),
            "WIDE".to_string(),
            39,
        ));
        assert!(config.validate().is_err());

        config.tokens[0].decimals = MAX_DECIMALS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("127.0.0.1"));
        assert!(toml_string.contains("8081"));
        assert!(toml_string.contains("movementnetwork.xyz"));
    }
}
