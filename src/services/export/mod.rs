pub mod csv;
pub mod exporter;
pub mod normalize;
pub mod pagination;
pub mod worker;

pub use csv::{transactions_to_csv, CSV_HEADER};
pub use exporter::TransactionExporter;
pub use normalize::normalize_transaction;
pub use pagination::{page_windows, PageWindow, DEFAULT_PAGE_SIZE};
pub use worker::{run_export, ExportMessage, ExportRequest, ExportWorker};
