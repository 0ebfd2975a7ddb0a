use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Internal server error")]
    InternalError,

    #[display(fmt = "Bad request: {}", _0)]
    BadRequest(String),

    #[display(fmt = "Not found: {}", _0)]
    NotFound(String),

    #[display(fmt = "Unauthorized: {}", _0)]
    Unauthorized(String),

    #[display(fmt = "Upstream error: {}", _0)]
    UpstreamError(String),
}

/// Failures of a transaction history export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to fetch transactions: {0}")]
    Ledger(String),

    #[error("Export worker is not running")]
    WorkerUnavailable,
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        log::error!("Anyhow error: {:#}", error);
        ApiError::InternalError
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        log::error!("Export error: {}", error);
        match error {
            ExportError::Ledger(_) => ApiError::UpstreamError(error.to_string()),
            ExportError::WorkerUnavailable => ApiError::InternalError,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::InternalError => "Internal server error".to_string(),
            ApiError::BadRequest(ref message)
            | ApiError::NotFound(ref message)
            | ApiError::Unauthorized(ref message)
            | ApiError::UpstreamError(ref message) => message.clone(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UpstreamError("x".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(ApiError::InternalError.to_string(), "Internal server error");
    }

    #[test]
    fn test_export_error_mapping() {
        let api: ApiError = ExportError::Ledger("timeout".to_string()).into();
        assert!(matches!(api, ApiError::UpstreamError(ref m) if m.contains("timeout")));

        let api: ApiError = ExportError::WorkerUnavailable.into();
        assert!(matches!(api, ApiError::InternalError));
    }
}
