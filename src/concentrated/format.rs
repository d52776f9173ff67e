/// Magnitudes at or above this are shown in exponential notation.
const EXP_UPPER: f64 = 1e9;
/// Non-zero magnitudes below this are shown in exponential notation.
const EXP_LOWER: f64 = 1e-6;

const DECIMALS_ABOVE_ONE: usize = 6;
const DECIMALS_BELOW_ONE: usize = 10;
const EXP_DIGITS: usize = 6;

/// Display a range price: fixed notation for ordinary magnitudes,
/// exponential (`1.5e+9`, `2.5e-7`) for very large or very small ones.
/// Trailing zeros are trimmed. Non-finite values render as `"0"`.
pub fn format_concentrated_price(value: f64) -> String {
    format_magnitude(value)
}

/// Same rules as [`format_concentrated_price`], for token amounts.
pub fn format_concentrated_amount(value: f64) -> String {
    format_magnitude(value)
}

fn format_magnitude(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXP_UPPER || magnitude < EXP_LOWER {
        return exponential(value);
    }
    let decimals = if magnitude >= 1.0 {
        DECIMALS_ABOVE_ONE
    } else {
        DECIMALS_BELOW_ONE
    };
    trim_zeros(&format!("{value:.decimals$}")).to_string()
}

fn exponential(value: f64) -> String {
    let formatted = format!("{:.*e}", EXP_DIGITS, value);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let mantissa = trim_zeros(mantissa);
    match exponent.strip_prefix('-') {
        Some(digits) => format!("{mantissa}e-{digits}"),
        None => format!("{mantissa}e+{exponent}"),
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_fraction_zeros() {
        assert_eq!(trim_zeros("100"), "100");
        assert_eq!(trim_zeros("1.500000"), "1.5");
        assert_eq!(trim_zeros("2.000000"), "2");
    }

    #[test]
    fn exponent_carries_sign() {
        assert_eq!(exponential(1.5e9), "1.5e+9");
        assert_eq!(exponential(2.5e-7), "2.5e-7");
        assert_eq!(exponential(-3e12), "-3e+12");
    }
}
