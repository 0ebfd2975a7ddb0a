pub mod dto;
pub mod service;
pub mod token;

pub use dto::*;
pub use token::{
    count_tokens_by_chain_id_handler, get_token_by_address_handler,
    get_tokens_by_chain_id_handler, get_tokens_handler,
};
