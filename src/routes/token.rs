use actix_web::web;

use crate::handlers::token::{
    count_tokens_by_chain_id_handler, get_token_by_address_handler,
    get_tokens_by_chain_id_handler, get_tokens_handler,
};

pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tokens", web::get().to(get_tokens_handler))
        .route(
            "/tokens/chain/{chain_id}",
            web::get().to(get_tokens_by_chain_id_handler),
        )
        .route(
            "/tokens/chain/{chain_id}/address/{address}",
            web::get().to(get_token_by_address_handler),
        )
        .route(
            "/tokens/chain/{chain_id}/count",
            web::get().to(count_tokens_by_chain_id_handler),
        );
}
