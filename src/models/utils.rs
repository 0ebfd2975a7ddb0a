/// Prefix an account address with `0x` unless it already carries one
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        trimmed.to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

/// Largest power of ten that fits in a `u128`
pub const MAX_DECIMALS: u8 = 38;

/// Render a raw on-chain integer scaled down by `10^decimals`, rounded half-up
/// to `precision` fractional digits (at most `MAX_DECIMALS`)
pub fn format_units(raw: u128, decimals: u8, precision: u8) -> String {
    let precision = precision.min(decimals).min(MAX_DECIMALS);
    let drop = u32::from(decimals - precision);

    let scaled = match 10u128.checked_pow(drop) {
        Some(divisor) if drop > 0 => raw / divisor + u128::from(raw % divisor >= divisor / 2),
        Some(_) => raw,
        None => 0,
    };

    if precision == 0 {
        return scaled.to_string();
    }

    let unit = 10u128.pow(u32::from(precision));
    format!(
        "{}.{:0width$}",
        scaled / unit,
        scaled % unit,
        width = precision as usize
    )
}

/// Case-insensitive address comparison key
pub fn address_key(address: &str) -> String {
    normalize_address(address).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_address() {
        assert_eq!(normalize_address("abc"), "0xabc");
        assert_eq!(normalize_address("0xabc"), "0xabc");
        assert_eq!(normalize_address(" 0x1 "), "0x1");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(100_000_000, 8, 4), "1.0000");
        assert_eq!(format_units(123_456_789, 8, 4), "1.2346");
        assert_eq!(format_units(123_449_999, 8, 4), "1.2345");
        assert_eq!(format_units(5_000, 8, 4), "0.0001");
        assert_eq!(format_units(4_999, 8, 4), "0.0000");
        assert_eq!(format_units(0, 8, 4), "0.0000");
        assert_eq!(format_units(1_500, 3, 0), "2");
        assert_eq!(format_units(7, 0, 4), "7");
    }

    #[test]
    fn test_format_units_wide_decimals() {
        assert_eq!(
            format_units(u128::MAX, 40, 40),
            "0.03402823669209384634633746074317682115"
        );
        assert_eq!(format_units(u128::MAX, 38, 38), "3.40282366920938463463374607431768211455");
        assert_eq!(format_units(5, 255, 4), "0.0000");
    }

    #[test]
    fn test_address_key() {
        assert_eq!(address_key("ABC"), "0xabc");
        assert_eq!(address_key("0xAbC"), "0xabc");
    }
}
