use actix_web::web;

use crate::handlers::export::{
    download_transactions_csv_handler, export_transactions_handler,
    get_transaction_history_handler,
};

pub fn configure_export_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/export", web::post().to(export_transactions_handler))
        .route(
            "/wallets/{address}/transactions",
            web::get().to(get_transaction_history_handler),
        )
        .route(
            "/wallets/{address}/transactions/export",
            web::get().to(download_transactions_csv_handler),
        );
}
