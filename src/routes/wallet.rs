use actix_web::web;

use crate::handlers::wallet::get_wallet_stats_handler;

pub fn configure_wallet_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/wallets/{address}/stats",
        web::get().to(get_wallet_stats_handler),
    );
}
