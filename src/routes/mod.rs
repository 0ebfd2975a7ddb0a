pub mod export;
pub mod routes;
pub mod token;
pub mod wallet;

pub use routes::*;
