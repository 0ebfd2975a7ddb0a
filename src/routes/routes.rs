use actix_web::{web, HttpResponse, Result};

use crate::routes::{
    export::configure_export_routes, token::configure_token_routes,
    wallet::configure_wallet_routes,
};

/// Health check endpoint
async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(configure_export_routes)
            .configure(configure_token_routes)
            .configure(configure_wallet_routes),
    );
}
