pub mod dto;
pub mod service;
pub mod wallet;

pub use dto::*;
pub use wallet::get_wallet_stats_handler;
