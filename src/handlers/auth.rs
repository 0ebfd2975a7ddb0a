use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use log::warn;
use std::sync::Arc;

use crate::config::Config;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// API Key extractor guarding the export endpoints
pub struct ApiKey(pub Option<String>);

impl FromRequest for ApiKey {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let configured_key = match req.app_data::<web::Data<Arc<Config>>>() {
            Some(config) => config.server.api_key.clone(),
            None => {
                warn!("Config not found in app data");
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Configuration error",
                )));
            }
        };

        let header_key = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        match (configured_key, header_key) {
            // API key not configured, allow access (for development)
            (None, header_key) => ready(Ok(ApiKey(header_key))),
            (Some(configured), Some(provided)) if configured == provided => {
                ready(Ok(ApiKey(Some(provided))))
            }
            (Some(_), Some(_)) => {
                warn!("Invalid API key provided");
                ready(Err(actix_web::error::ErrorUnauthorized("Invalid API key")))
            }
            (Some(_), None) => {
                warn!("API key required but not provided");
                ready(Err(actix_web::error::ErrorUnauthorized("API key required")))
            }
        }
    }
}
