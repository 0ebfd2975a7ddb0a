use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Aggregated wallet statistics as returned by the indexing API.
///
/// The upstream service is inconsistent about numeric encoding: the same
/// field may arrive as a JSON number, a numeric string or null. Every field is
/// read through [`deserialize_number_or_string`] so both encodings parse to
/// the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletStats {
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub total_transactions: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub total_tokens: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub total_nfts: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub active_days: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub total_holdings_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub token_holdings_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub nft_holdings_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub total_volume_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub buy_volume_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub sell_volume_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub realized_pnl_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub unrealized_pnl_usd: Option<f64>,
}

/// GraphQL selection set matching [`WalletStats`]
pub const WALLET_STATS_FIELDS: [&str; 12] = [
    "total_transactions",
    "total_tokens",
    "total_nfts",
    "active_days",
    "total_holdings_usd",
    "token_holdings_usd",
    "nft_holdings_usd",
    "total_volume_usd",
    "buy_volume_usd",
    "sell_volume_usd",
    "realized_pnl_usd",
    "unrealized_pnl_usd",
];

pub fn deserialize_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_numeric))
}

fn parse_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Rendered strings for the wallet stats panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletStatsDisplay {
    pub total_transactions: String,
    pub total_tokens: String,
    pub total_nfts: String,
    pub active_days: String,
    pub total_holdings_usd: String,
    pub token_holdings_usd: String,
    pub nft_holdings_usd: String,
    pub total_volume_usd: String,
    pub buy_volume_usd: String,
    pub sell_volume_usd: String,
    pub realized_pnl_usd: String,
    pub unrealized_pnl_usd: String,
}

const MISSING: &str = "-";

impl WalletStats {
    pub fn display(&self) -> WalletStatsDisplay {
        WalletStatsDisplay {
            total_transactions: format_count(self.total_transactions),
            total_tokens: format_count(self.total_tokens),
            total_nfts: format_count(self.total_nfts),
            active_days: format_count(self.active_days),
            total_holdings_usd: format_usd(self.total_holdings_usd),
            token_holdings_usd: format_usd(self.token_holdings_usd),
            nft_holdings_usd: format_usd(self.nft_holdings_usd),
            total_volume_usd: format_usd(self.total_volume_usd),
            buy_volume_usd: format_usd(self.buy_volume_usd),
            sell_volume_usd: format_usd(self.sell_volume_usd),
            realized_pnl_usd: format_pnl(self.realized_pnl_usd),
            unrealized_pnl_usd: format_pnl(self.unrealized_pnl_usd),
        }
    }
}

pub fn format_count(value: Option<f64>) -> String {
    match value {
        Some(v) => group_thousands(&format!("{:.0}", v.abs()), v < 0.0),
        None => MISSING.to_string(),
    }
}

pub fn format_usd(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let body = group_thousands(&format!("{:.2}", v.abs()), false);
            if v < 0.0 {
                format!("-${}", body)
            } else {
                format!("${}", body)
            }
        }
        None => MISSING.to_string(),
    }
}

pub fn format_pnl(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("+{}", format_usd(Some(v))),
        other => format_usd(other),
    }
}

fn group_thousands(digits: &str, negative: bool) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_parse_like_numbers() {
        let from_strings: WalletStats = serde_json::from_value(json!({
            "total_transactions": "42",
            "total_holdings_usd": "1234.5",
            "realized_pnl_usd": "-3.25"
        }))
        .unwrap();
        let from_numbers: WalletStats = serde_json::from_value(json!({
            "total_transactions": 42,
            "total_holdings_usd": 1234.5,
            "realized_pnl_usd": -3.25
        }))
        .unwrap();

        assert_eq!(from_strings, from_numbers);
        assert_eq!(from_strings.display(), from_numbers.display());
        assert_eq!(from_strings.display().total_holdings_usd, "$1,234.50");
    }

    #[test]
    fn test_null_and_garbage_are_missing() {
        let stats: WalletStats = serde_json::from_value(json!({
            "total_tokens": null,
            "total_nfts": "n/a"
        }))
        .unwrap();

        assert_eq!(stats.total_tokens, None);
        assert_eq!(stats.total_nfts, None);
        assert_eq!(stats.active_days, None);
        assert_eq!(stats.display().total_nfts, "-");
    }

    #[test]
    fn test_formatters() {
        assert_eq!(format_count(Some(1234567.0)), "1,234,567");
        assert_eq!(format_count(Some(12.0)), "12");
        assert_eq!(format_usd(Some(0.0)), "$0.00");
        assert_eq!(format_usd(Some(999.999)), "$1,000.00");
        assert_eq!(format_usd(Some(-1500.0)), "-$1,500.00");
        assert_eq!(format_pnl(Some(10.0)), "+$10.00");
        assert_eq!(format_pnl(Some(-3.25)), "-$3.25");
        assert_eq!(format_pnl(None), "-");
    }
}
