pub mod ledger;
pub mod rest_ledger;
pub mod utils;
pub mod wallet_stats;

pub use ledger::*;
pub use rest_ledger::*;
pub use utils::*;
pub use wallet_stats::*;
