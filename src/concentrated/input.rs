//! Parsing of free-form range inputs. Invalid text yields `None`; nothing
//! here panics or errors.

/// Positive price typed by the user, e.g. `"1,234.5"`.
pub fn parse_concentrated_price_input(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v > 0.0)
}

/// Positive token amount typed by the user.
pub fn parse_concentrated_amount(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v > 0.0)
}

/// Non-negative percentage; a trailing `%` is allowed.
pub fn parse_concentrated_percent(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix('%').unwrap_or(text);
    parse_number(text).filter(|v| *v >= 0.0)
}

fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | '\'') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_stripped() {
        assert_eq!(parse_number("1,234,567.5"), Some(1_234_567.5));
        assert_eq!(parse_number(" 1 000 "), Some(1000.0));
        assert_eq!(parse_number("1_000"), Some(1000.0));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e400"), None);
        assert_eq!(parse_number(""), None);
    }
}
