use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::errors::ExportError;
use crate::services::export::exporter::TransactionExporter;

const QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub wallet_address: String,
}

/// Terminal reply of one export job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExportMessage {
    Completed {
        #[serde(rename = "csvContent")]
        csv_content: String,
    },
    Error {
        error: String,
    },
}

/// Run a single export. An empty address produces no message at all.
pub async fn run_export(
    exporter: &TransactionExporter,
    request: &ExportRequest,
) -> Option<ExportMessage> {
    let address = request.wallet_address.trim();
    if address.is_empty() {
        return None;
    }

    match exporter.export_csv(address).await {
        Ok(csv_content) => Some(ExportMessage::Completed { csv_content }),
        Err(e) => {
            error!("Export for {} failed: {}", address, e);
            Some(ExportMessage::Error {
                error: e.to_string(),
            })
        }
    }
}

struct ExportJob {
    request: ExportRequest,
    reply: oneshot::Sender<Option<ExportMessage>>,
}

/// Handle to the background export task.
///
/// Jobs are queued and executed one at a time; each caller awaits exactly one
/// reply for its own request.
#[derive(Clone)]
pub struct ExportWorker {
    sender: mpsc::Sender<ExportJob>,
}

impl ExportWorker {
    pub fn spawn(exporter: Arc<TransactionExporter>) -> Self {
        let (sender, mut receiver) = mpsc::channel::<ExportJob>(QUEUE_CAPACITY);

        tokio::spawn(async move {
            info!("Export worker started");
            while let Some(job) = receiver.recv().await {
                let message = run_export(&exporter, &job.request).await;
                if job.reply.send(message).is_err() {
                    warn!(
                        "Export requester for {} went away before completion",
                        job.request.wallet_address
                    );
                }
            }
            info!("Export worker stopped");
        });

        Self { sender }
    }

    pub async fn submit(&self, request: ExportRequest) -> Result<Option<ExportMessage>, ExportError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(ExportJob { request, reply })
            .await
            .map_err(|_| ExportError::WorkerUnavailable)?;

        response.await.map_err(|_| ExportError::WorkerUnavailable)
    }
}
