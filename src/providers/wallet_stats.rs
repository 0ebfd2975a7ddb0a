use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::config::IndexerConfig;
use crate::models::wallet_stats::{WalletStats, WALLET_STATS_FIELDS};
use crate::providers::utils::create_http_client;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_SECRET_HEADER: &str = "x-api-secret";

/// Source of per-wallet aggregate statistics
#[async_trait]
pub trait WalletStatsProvider: Send + Sync {
    async fn fetch_wallet_stats(&self, address: &str) -> Result<WalletStats>;
}

/// Queries `movement { wallet_stats(address) }` on the hosted indexing API
pub struct GraphqlStatsClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    api_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<GraphqlData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    #[serde(default)]
    movement: Option<MovementData>,
}

#[derive(Debug, Deserialize)]
struct MovementData {
    #[serde(default)]
    wallet_stats: Option<WalletStats>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

pub fn wallet_stats_query() -> String {
    format!(
        "query WalletStats($address: String!) {{ movement {{ wallet_stats(address: $address) {{ {} }} }} }}",
        WALLET_STATS_FIELDS.join(" ")
    )
}

impl GraphqlStatsClient {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        api_secret: Option<String>,
        timeout_ms: u64,
    ) -> Result<Self> {
        Ok(Self {
            http: create_http_client(timeout_ms)?,
            endpoint,
            api_key,
            api_secret,
        })
    }

    pub fn from_config(config: &IndexerConfig) -> Result<Self> {
        Self::new(
            config.graphql_url.clone(),
            config.api_key.clone(),
            config.api_secret.clone(),
            config.request_timeout_ms,
        )
    }
}

fn extract_wallet_stats(response: GraphqlResponse) -> Result<WalletStats> {
    if let Some(error) = response.errors.into_iter().next() {
        return Err(anyhow!(error.message));
    }

    response
        .data
        .and_then(|data| data.movement)
        .and_then(|movement| movement.wallet_stats)
        .ok_or_else(|| anyhow!("No wallet stats returned"))
}

#[async_trait]
impl WalletStatsProvider for GraphqlStatsClient {
    async fn fetch_wallet_stats(&self, address: &str) -> Result<WalletStats> {
        debug!("Querying wallet stats for {}", address);

        let body = json!({
            "query": wallet_stats_query(),
            "variables": { "address": address },
        });

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some(api_secret) = &self.api_secret {
            request = request.header(API_SECRET_HEADER, api_secret);
        }

        let response: GraphqlResponse = request
            .send()
            .await
            .context("Wallet stats request failed")?
            .error_for_status()
            .context("Wallet stats request rejected")?
            .json()
            .await
            .context("Malformed wallet stats response")?;

        extract_wallet_stats(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_selects_all_fields() {
        let query = wallet_stats_query();
        assert!(query.starts_with("query WalletStats($address: String!)"));
        assert!(query.contains("wallet_stats(address: $address)"));
        for field in WALLET_STATS_FIELDS {
            assert!(query.contains(field));
        }
    }

    #[test]
    fn test_extract_wallet_stats() {
        let response: GraphqlResponse = serde_json::from_value(serde_json::json!({
            "data": { "movement": { "wallet_stats": {
                "total_transactions": "12",
                "unrealized_pnl_usd": 4.5
            } } }
        }))
        .unwrap();

        let stats = extract_wallet_stats(response).unwrap();
        assert_eq!(stats.total_transactions, Some(12.0));
        assert_eq!(stats.unrealized_pnl_usd, Some(4.5));
    }

    #[test]
    fn test_extract_reports_first_graphql_error() {
        let response: GraphqlResponse = serde_json::from_value(serde_json::json!({
            "data": null,
            "errors": [{ "message": "invalid address" }, { "message": "second" }]
        }))
        .unwrap();

        let err = extract_wallet_stats(response).unwrap_err();
        assert_eq!(err.to_string(), "invalid address");
    }

    #[test]
    fn test_extract_missing_stats() {
        let response: GraphqlResponse =
            serde_json::from_value(serde_json::json!({ "data": { "movement": null } })).unwrap();

        let err = extract_wallet_stats(response).unwrap_err();
        assert_eq!(err.to_string(), "No wallet stats returned");
    }
}
