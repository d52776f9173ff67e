use super::abbreviate::{abbreviate_number, ABBREVIATE_ABOVE};

/// Decimals shown for a value, by magnitude:
///
/// | magnitude   | decimals |
/// |-------------|----------|
/// | >= 2000     | 0        |
/// | >= 10       | 2        |
/// | >= 1        | 3        |
/// | >= 0.1      | 4        |
/// | >= 0.01     | 5        |
/// | >= 0.001    | 6        |
/// | >= 1e-7     | 7        |
/// | otherwise   | 0        |
pub fn precision_for(value: f64) -> u32 {
    let magnitude = value.abs();
    match magnitude {
        m if m >= 2000.0 => 0,
        m if m >= 10.0 => 2,
        m if m >= 1.0 => 3,
        m if m >= 0.1 => 4,
        m if m >= 0.01 => 5,
        m if m >= 0.001 => 6,
        m if m >= 1e-7 => 7,
        _ => 0,
    }
}

/// Truncate `value` to `num_decimals` decimals. This floors rather than
/// rounds: `1.2399` at 2 decimals is `"1.23"`, and negative values move
/// away from zero (`-1.231` gives `"-1.24"`).
pub fn round_to_precision(value: f64, num_decimals: u32) -> String {
    let factor = 10f64.powi(num_decimals as i32);
    let truncated = (value * factor).floor() / factor;
    if !truncated.is_finite() {
        return "0".to_string();
    }
    // `+ 0.0` turns -0 into 0.
    format!("{}", truncated + 0.0)
}

/// Human-readable balance: truncated to [`precision_for`] decimals with
/// thousands separators, or abbreviated (`1.5K`, `2.34M`) when `abbreviate`
/// is set and the value is above 1000.
pub fn format_balance(value: f64, abbreviate: bool) -> String {
    if abbreviate && value > ABBREVIATE_ABOVE {
        return abbreviate_number(value);
    }
    group_thousands(&round_to_precision(value, precision_for(value)))
}

/// Percentage with two truncated decimals, e.g. `"12.34%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", group_thousands(&round_to_precision(value, 2)))
}

pub(crate) fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
        assert_eq!(group_thousands("-1000"), "-1,000");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("0.0001"), "0.0001");
    }
}
