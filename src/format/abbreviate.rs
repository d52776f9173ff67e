use super::precision::{format_balance, round_to_precision};

/// Abbreviation applies strictly above this value.
pub const ABBREVIATE_ABOVE: f64 = 1000.0;

const UNITS: &[(f64, &str)] = &[
    (1e15, "Q"),
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
    (1e3, "K"),
];

/// `1500` -> `"1.5K"`, `2_345_678` -> `"2.34M"`. The scaled value is
/// truncated to two decimals. Values of 1000 or less, and non-finite
/// values, are formatted as a plain balance.
pub fn abbreviate_number(value: f64) -> String {
    if !value.is_finite() || value <= ABBREVIATE_ABOVE {
        return format_balance(value, false);
    }
    let (unit, suffix) = UNITS
        .iter()
        .find(|(unit, _)| value >= *unit)
        .copied()
        .unwrap_or((1e3, "K"));
    format!("{}{suffix}", round_to_precision(value / unit, 2))
}
