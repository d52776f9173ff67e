use aqua_estimates::format::{
    abbreviate_number, format_balance, format_percent, precision_for, round_to_precision,
};

#[test]
fn test_round_to_precision_floors() {
    assert_eq!(round_to_precision(1.2399, 2), "1.23");
    assert_eq!(round_to_precision(2.5, 0), "2");
    assert_eq!(round_to_precision(5.0, 3), "5");
    assert_eq!(round_to_precision(-1.231, 2), "-1.24");
}

#[test]
fn test_round_to_precision_degenerate() {
    assert_eq!(round_to_precision(f64::NAN, 2), "0");
    assert_eq!(round_to_precision(f64::INFINITY, 2), "0");
    assert_eq!(round_to_precision(-0.0, 2), "0");
}

#[test]
fn test_precision_steps() {
    let cases = [
        (2000.0, 0),
        (1999.99, 2),
        (10.0, 2),
        (9.99, 3),
        (1.0, 3),
        (0.5, 4),
        (0.05, 5),
        (0.005, 6),
        (0.0005, 7),
        (1e-7, 7),
        (5e-8, 0),
        (0.0, 0),
        (-50.0, 2),
    ];
    for (value, decimals) in cases {
        assert_eq!(precision_for(value), decimals, "value {value}");
    }
}

#[test]
fn test_format_balance() {
    assert_eq!(format_balance(1_234_567.891, false), "1,234,567");
    assert_eq!(format_balance(12.3456, false), "12.34");
    assert_eq!(format_balance(0.00123456, false), "0.001234");
    assert_eq!(format_balance(1000.0, true), "1,000");
    assert_eq!(format_balance(f64::NAN, true), "0");
}

#[test]
fn test_format_balance_abbreviated() {
    assert_eq!(format_balance(1500.0, true), "1.5K");
    assert_eq!(format_balance(2_345_678.0, true), "2.34M");
    assert_eq!(format_balance(3e9, true), "3B");
    assert_eq!(format_balance(7.5e12, true), "7.5T");
    assert_eq!(format_balance(4e15, true), "4Q");
    // Abbreviation only on request.
    assert_eq!(format_balance(1500.0, false), "1,500");
}

#[test]
fn test_abbreviate_small_values_fall_through() {
    assert_eq!(abbreviate_number(999.5), "999.5");
    assert_eq!(abbreviate_number(-5000.0), "-5,000");
}

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(12.3456), "12.34%");
    assert_eq!(format_percent(0.0), "0%");
    assert_eq!(format_percent(2500.0), "2,500%");
}
