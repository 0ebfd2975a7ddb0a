pub mod token;
pub mod transaction;
pub mod utils;
pub mod wallet_stats;

// Re-export models explicitly to avoid ambiguous glob re-exports
pub use token::TokenMetadata;
pub use transaction::{Transaction, TransactionStatus, TransactionType};
pub use utils::{address_key, format_units, normalize_address, MAX_DECIMALS};
pub use wallet_stats::{WalletStats, WalletStatsDisplay};
