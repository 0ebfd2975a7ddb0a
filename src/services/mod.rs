pub mod export;
pub mod token_registry;

pub use export::{ExportMessage, ExportRequest, ExportWorker, TransactionExporter};
pub use token_registry::TokenRegistry;
