use regex::Regex;
use std::sync::OnceLock;

use crate::errors::ApiError;
use crate::models::normalize_address;

fn account_address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0[xX])?[0-9a-fA-F]{1,64}$").expect("account address pattern is valid")
    })
}

/// Check an account address from a request path and return it `0x`-prefixed
pub fn validate_account_address(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if account_address_pattern().is_match(trimmed) {
        Ok(normalize_address(trimmed))
    } else {
        Err(ApiError::BadRequest(format!(
            "Invalid account address: {}",
            raw
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_account_address() {
        assert_eq!(validate_account_address("0x1").unwrap(), "0x1");
        assert_eq!(validate_account_address("abc").unwrap(), "0xabc");
        assert!(validate_account_address("0x").is_err());
        assert!(validate_account_address("0xnothex").is_err());
        assert!(validate_account_address(&"a".repeat(65)).is_err());
    }
}
