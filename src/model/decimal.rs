use serde::{Deserialize, Deserializer};

/// Coerce a decimal string the way the pool API's consumers always have:
/// surrounding whitespace is ignored, an empty string is zero, anything
/// that is not a plain decimal number is NaN.
///
/// The result is an IEEE-754 double. These figures only ever feed display
/// estimates, so no fixed-point arithmetic is attempted.
pub fn coerce_decimal(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    // `f64::from_str` also accepts "inf"/"nan" spellings; the API never
    // sends those, and treating them as unparseable keeps results finite.
    if trimmed
        .chars()
        .any(|c| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Text(String),
    Number(serde_json::Number),
}

/// Accept a decimal field as either a JSON string or a JSON number.
/// `null` becomes `"0"`.
pub(crate) fn de_decimal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawDecimal>::deserialize(deserializer)? {
        Some(RawDecimal::Text(s)) => s,
        Some(RawDecimal::Number(n)) => n.to_string(),
        None => "0".to_string(),
    })
}

/// Accept a unix timestamp (seconds) as either a JSON number or a numeric
/// string. `null` becomes 0, which is always in the past.
pub(crate) fn de_timestamp<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<RawDecimal>::deserialize(deserializer)? {
        Some(RawDecimal::Text(s)) => coerce_decimal(&s),
        Some(RawDecimal::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        None => return Ok(0),
    };
    if raw.is_finite() && raw >= 0.0 {
        Ok(raw.trunc() as u64)
    } else {
        Err(serde::de::Error::custom(format!(
            "expected a non-negative unix timestamp, got {raw}"
        )))
    }
}

/// Seconds to milliseconds, saturating at `i64::MAX`.
pub(crate) fn seconds_to_ms(seconds: u64) -> i64 {
    i64::try_from(seconds)
        .unwrap_or(i64::MAX)
        .saturating_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_are_zero() {
        assert_eq!(coerce_decimal(""), 0.0);
        assert_eq!(coerce_decimal("   "), 0.0);
    }

    #[test]
    fn plain_decimals_parse() {
        assert_eq!(coerce_decimal("1000000000"), 1e9);
        assert_eq!(coerce_decimal(" 0.25 "), 0.25);
        assert_eq!(coerce_decimal("1e3"), 1000.0);
    }

    #[test]
    fn garbage_is_nan() {
        assert!(coerce_decimal("abc").is_nan());
        assert!(coerce_decimal("inf").is_nan());
        assert!(coerce_decimal("1,000").is_nan());
    }

    #[test]
    fn timestamp_conversion_saturates() {
        assert_eq!(seconds_to_ms(2), 2000);
        assert_eq!(seconds_to_ms(u64::MAX), i64::MAX);
    }
}
