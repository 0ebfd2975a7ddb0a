pub mod dto;
pub mod export;

pub use export::{
    download_transactions_csv_handler, export_transactions_handler,
    get_transaction_history_handler,
};
