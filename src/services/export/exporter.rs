use log::{debug, info, warn};
use std::sync::Arc;

use crate::errors::ExportError;
use crate::models::Transaction;
use crate::providers::LedgerClient;
use crate::services::export::csv::transactions_to_csv;
use crate::services::export::normalize::normalize_transaction;
use crate::services::export::pagination::{page_windows, DEFAULT_PAGE_SIZE};

/// Assembles a wallet's full transaction history from paginated ledger calls
pub struct TransactionExporter {
    client: Arc<dyn LedgerClient>,
    page_size: u64,
}

impl TransactionExporter {
    pub fn new(client: Arc<dyn LedgerClient>, page_size: Option<u64>) -> Self {
        Self {
            client,
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Sequence number of the account; lookup failures count as zero transactions
    pub async fn resolve_transaction_count(&self, address: &str) -> u64 {
        match self.client.get_sequence_number(address).await {
            Ok(count) => count,
            Err(e) => {
                warn!(
                    "Account lookup for {} failed, exporting no transactions: {:#}",
                    address, e
                );
                0
            }
        }
    }

    /// Every transaction of `address` in chronological order
    pub async fn fetch_history(&self, address: &str) -> Result<Vec<Transaction>, ExportError> {
        let total = self.resolve_transaction_count(address).await;
        let windows = page_windows(total, self.page_size);
        info!(
            "Exporting {} transactions for {} in {} pages",
            total,
            address,
            windows.len()
        );

        let mut history: Vec<Transaction> = Vec::new();
        for window in windows {
            debug!(
                "Fetching page {} (start {}, limit {}) for {}",
                window.page, window.offset, window.limit, address
            );

            let page = self
                .client
                .get_account_transactions(address, window.offset, window.limit)
                .await
                .map_err(|e| ExportError::Ledger(format!("{:#}", e)))?;

            // Pages are visited newest first but each one is ascending
            history.extend(page.iter().rev().map(normalize_transaction));
        }
        history.reverse();

        Ok(history)
    }

    pub async fn export_csv(&self, address: &str) -> Result<String, ExportError> {
        let history = self.fetch_history(address).await?;
        Ok(transactions_to_csv(&history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::LedgerTransaction;
    use crate::services::export::csv::CSV_HEADER;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Ledger holding `total` transactions with versions `1000 + sequence`
    struct FakeLedger {
        total: Option<u64>,
        fail_at_offset: Option<u64>,
        calls: Mutex<Vec<(u64, u64)>>,
    }

    impl FakeLedger {
        fn with_total(total: u64) -> Self {
            Self {
                total: Some(total),
                fail_at_offset: None,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LedgerClient for FakeLedger {
        async fn get_sequence_number(&self, _address: &str) -> anyhow::Result<u64> {
            self.total.ok_or_else(|| anyhow!("account not found"))
        }

        async fn get_account_transactions(
            &self,
            _address: &str,
            offset: u64,
            limit: u64,
        ) -> anyhow::Result<Vec<LedgerTransaction>> {
            self.calls.lock().unwrap().push((offset, limit));
            if self.fail_at_offset == Some(offset) {
                return Err(anyhow!("node unavailable"));
            }
            Ok((offset..offset + limit)
                .map(|seq| LedgerTransaction {
                    version: (1000 + seq).to_string(),
                    hash: format!("0x{:x}", seq),
                    success: true,
                    ..Default::default()
                })
                .collect())
        }
    }

    fn exporter(ledger: FakeLedger) -> (Arc<FakeLedger>, TransactionExporter) {
        let ledger = Arc::new(ledger);
        let exporter = TransactionExporter::new(ledger.clone(), None);
        (ledger, exporter)
    }

    #[tokio::test]
    async fn test_history_is_chronological() {
        for total in [0u64, 1, 20, 21, 39, 40] {
            let (_, exporter) = exporter(FakeLedger::with_total(total));
            let history = exporter.fetch_history("0x1").await.unwrap();

            let versions: Vec<u64> = history.iter().map(|tx| tx.version.parse().unwrap()).collect();
            let expected: Vec<u64> = (0..total).map(|seq| 1000 + seq).collect();
            assert_eq!(versions, expected, "total {}", total);
        }
    }

    #[tokio::test]
    async fn test_pages_requested_newest_first() {
        let (ledger, exporter) = exporter(FakeLedger::with_total(45));
        exporter.fetch_history("0x1").await.unwrap();

        let calls = ledger.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![(25, 20), (5, 20), (0, 5)]);
    }

    #[tokio::test]
    async fn test_missing_account_exports_header_only() {
        let (ledger, exporter) = exporter(FakeLedger {
            total: None,
            fail_at_offset: None,
            calls: Mutex::new(Vec::new()),
        });

        let csv = exporter.export_csv("0xmissing").await.unwrap();
        assert_eq!(csv, CSV_HEADER);
        assert!(ledger.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_page_failure_aborts_export() {
        let (_, exporter) = exporter(FakeLedger {
            total: Some(30),
            fail_at_offset: Some(0),
            calls: Mutex::new(Vec::new()),
        });

        let err = exporter.export_csv("0x1").await.unwrap_err();
        assert!(matches!(err, ExportError::Ledger(ref msg) if msg.contains("node unavailable")));
    }

    #[tokio::test]
    async fn test_custom_page_size() {
        let ledger = Arc::new(FakeLedger::with_total(7));
        let exporter = TransactionExporter::new(ledger.clone(), Some(3));
        let history = exporter.fetch_history("0x1").await.unwrap();

        assert_eq!(history.len(), 7);
        assert_eq!(history.first().unwrap().version, "1000");
        assert_eq!(history.last().unwrap().version, "1006");
        assert_eq!(
            ledger.calls.lock().unwrap().clone(),
            vec![(4, 3), (1, 3), (0, 1)]
        );
    }
}
