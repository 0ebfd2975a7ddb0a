pub mod auth;
pub mod export;
pub mod token;
pub mod validation;
pub mod wallet;
