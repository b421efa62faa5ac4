//! Lossy-but-total coercion of loosely-typed payload fields.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

/// Coerces a JSON value to a `Decimal` amount.
///
/// Returns `Decimal::ZERO` for null, missing, or non-numeric input. Accepts
/// JSON numbers and numeric strings (clients are sloppy about which they
/// send for money fields).
#[must_use]
pub fn to_decimal(raw: &Value) -> Decimal {
    match raw {
        Value::Number(n) => n.to_string().parse::<Decimal>().unwrap_or(Decimal::ZERO),
        Value::String(s) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Coerces a JSON value to a calendar date.
///
/// Returns `None` for invalid or missing input. Accepts `YYYY-MM-DD` and
/// RFC 3339 timestamps (the date part is kept).
#[must_use]
pub fn to_date(raw: &Value) -> Option<NaiveDate> {
    let s = raw.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| chrono::DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[rstest]
    #[case(json!(100), dec!(100))]
    #[case(json!(99.95), dec!(99.95))]
    #[case(json!(-12.75), dec!(-12.75))]
    #[case(json!(1_000_000_000_000_i64), dec!(1_000_000_000_000))]
    #[case(json!("42.50"), dec!(42.50))]
    #[case(json!(" 7 "), dec!(7))]
    #[case(json!(null), dec!(0))]
    #[case(json!("not-a-number"), dec!(0))]
    #[case(json!(true), dec!(0))]
    #[case(json!([1, 2]), dec!(0))]
    fn test_to_decimal(#[case] raw: serde_json::Value, #[case] expected: Decimal) {
        assert_eq!(to_decimal(&raw), expected);
    }

    #[test]
    fn test_to_date_iso_date() {
        let date = to_date(&json!("2026-03-15")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }

    #[test]
    fn test_to_date_rfc3339() {
        let date = to_date(&json!("2026-03-15T10:30:00Z")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(""))]
    #[case(json!("tomorrow"))]
    #[case(json!(20260315))]
    #[case(json!("2026-13-40"))]
    fn test_to_date_invalid(#[case] raw: serde_json::Value) {
        assert!(to_date(&raw).is_none());
    }
}
