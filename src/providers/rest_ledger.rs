use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::config::LedgerConfig;
use crate::providers::ledger::{AccountInfo, LedgerClient, LedgerTransaction};
use crate::providers::utils::{create_http_client, parse_base_url};

/// [`LedgerClient`] backed by the node's REST API
#[derive(Clone)]
pub struct RestLedgerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestLedgerClient {
    pub fn new(rpc_url: &str, timeout_ms: u64) -> Result<Self> {
        Ok(Self {
            http: create_http_client(timeout_ms)?,
            base_url: parse_base_url(rpc_url)?,
        })
    }

    pub fn from_config(config: &LedgerConfig) -> Result<Self> {
        Self::new(&config.rpc_url, config.request_timeout_ms)
    }

    fn account_url(&self, address: &str, suffix: &str) -> Result<Url> {
        self.base_url
            .join(&format!("accounts/{}{}", address, suffix))
            .with_context(|| format!("Invalid account address '{}'", address))
    }
}

#[async_trait]
impl LedgerClient for RestLedgerClient {
    async fn get_sequence_number(&self, address: &str) -> Result<u64> {
        let url = self.account_url(address, "")?;
        debug!("Fetching account info from {}", url);

        let account: AccountInfo = self
            .http
            .get(url)
            .send()
            .await
            .context("Account lookup request failed")?
            .error_for_status()
            .with_context(|| format!("Account {} lookup rejected", address))?
            .json()
            .await
            .context("Malformed account response")?;

        account
            .sequence_number
            .parse::<u64>()
            .with_context(|| format!("Invalid sequence number '{}'", account.sequence_number))
    }

    async fn get_account_transactions(
        &self,
        address: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<LedgerTransaction>> {
        let mut url = self.account_url(address, "/transactions")?;
        url.query_pairs_mut()
            .append_pair("start", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        debug!("Fetching account transactions from {}", url);

        let transactions: Vec<LedgerTransaction> = self
            .http
            .get(url)
            .send()
            .await
            .context("Account transactions request failed")?
            .error_for_status()
            .with_context(|| {
                format!(
                    "Account {} transactions rejected (start {}, limit {})",
                    address, offset, limit
                )
            })?
            .json()
            .await
            .context("Malformed account transactions response")?;

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_urls() {
        let client = RestLedgerClient::new("https://mainnet.movementnetwork.xyz/v1", 1_000).unwrap();

        let info = client.account_url("0xabc", "").unwrap();
        assert_eq!(
            info.as_str(),
            "https://mainnet.movementnetwork.xyz/v1/accounts/0xabc"
        );

        let txs = client.account_url("0xabc", "/transactions").unwrap();
        assert_eq!(
            txs.as_str(),
            "https://mainnet.movementnetwork.xyz/v1/accounts/0xabc/transactions"
        );
    }
}
