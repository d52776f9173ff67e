use aqua_estimates::concentrated::{
    clamp, format_concentrated_amount, format_concentrated_price, nearest_usable_tick,
    parse_concentrated_amount, parse_concentrated_percent, parse_concentrated_price_input,
    price_to_tick, price_to_usable_tick, snap_down, snap_up, tick_to_price, usable_tick_bounds,
    Rounding, MAX_TICK, MIN_TICK, TICK_BASE,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn assert_rel_close(actual: f64, expected: f64, tolerance: f64) {
    let rel = ((actual - expected) / expected).abs();
    assert!(
        rel <= tolerance,
        "expected {expected}, got {actual} (relative error {rel})"
    );
}

// ── Tick <-> price ───────────────────────────────────────────────────

#[test]
fn test_tick_zero_is_price_one() {
    assert_eq!(tick_to_price(0.0, 0), 1.0);
    assert_eq!(tick_to_price(1.0, 0), TICK_BASE);
    assert_eq!(tick_to_price(0.0, 6), 1e6);
}

#[test]
fn test_price_to_tick_is_unrounded() {
    assert!((price_to_tick(TICK_BASE, 0) - 1.0).abs() < 1e-9);
    let tick = price_to_tick(2.0, 0);
    assert!(tick.fract() != 0.0);
    assert!((tick - 6931.8).abs() < 0.1);
}

#[test]
fn test_decimals_diff_shifts_price() {
    let tick = price_to_tick(1e-12, -12);
    assert!(tick.abs() < 1e-6);
}

#[test]
fn test_price_round_trip() {
    let prices = [1e-6, 0.5, 1.0, 3.7, 2500.0, 123_456.789, 1e6, 9.9e11];
    for d in [-12, -6, -1, 0, 1, 6, 12] {
        for price in prices {
            let back = tick_to_price(price_to_tick(price, d), d);
            assert_rel_close(back, price, 1e-9);
        }
    }
}

#[test]
fn test_price_without_tick() {
    assert!(!price_to_tick(0.0, 0).is_finite());
    assert!(price_to_tick(-1.0, 0).is_nan());
}

// ── Snapping ─────────────────────────────────────────────────────────

#[test]
fn test_snap_brackets_value() {
    let values = [-887_272.0, -1234.5, -60.0, -1.0, 0.0, 0.5, 59.0, 60.0, 61.0, 1e5 + 7.0];
    for spacing in [1.0, 2.0, 10.0, 60.0, 200.0] {
        for x in values {
            let down = snap_down(x, spacing);
            let up = snap_up(x, spacing);
            assert!(down <= x && x <= up, "x={x} spacing={spacing}");
            assert!(up - down <= spacing);
            // Snapping an aligned value is a no-op.
            assert_eq!(snap_down(up, spacing), up);
            assert_eq!(snap_up(down, spacing), down);
        }
    }
}

#[test]
fn test_snap_examples() {
    assert_eq!(snap_down(125.0, 60.0), 120.0);
    assert_eq!(snap_up(125.0, 60.0), 180.0);
    assert_eq!(snap_down(-125.0, 60.0), -180.0);
    assert_eq!(snap_up(-125.0, 60.0), -120.0);
}

#[test]
fn test_clamp() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(50.0, 0.0, 10.0), 10.0);
}

// ── Usable ticks ─────────────────────────────────────────────────────

#[test]
fn test_usable_bounds() {
    assert_eq!(usable_tick_bounds(1), (MIN_TICK, MAX_TICK));
    let (lo, hi) = usable_tick_bounds(200);
    assert_eq!((lo, hi), (-887_200, 887_200));
    assert_eq!(nearest_usable_tick(MIN_TICK, 200), -887_200);
}

#[test]
fn test_price_to_usable_tick() {
    for rounding in [Rounding::Down, Rounding::Up, Rounding::Nearest] {
        assert_eq!(price_to_usable_tick(1.0, 0, 60, rounding), Some(0));
    }

    let price = tick_to_price(100.0, 0);
    assert_eq!(price_to_usable_tick(price, 0, 60, Rounding::Down), Some(60));
    assert_eq!(price_to_usable_tick(price, 0, 60, Rounding::Up), Some(120));
    assert_eq!(price_to_usable_tick(price, 0, 60, Rounding::Nearest), Some(120));
}

#[test]
fn test_price_to_usable_tick_clamps_and_rejects() {
    assert_eq!(price_to_usable_tick(1e300, 0, 60, Rounding::Down), Some(887_220));
    assert_eq!(price_to_usable_tick(1e-300, 0, 60, Rounding::Up), Some(-887_220));
    assert_eq!(price_to_usable_tick(0.0, 0, 60, Rounding::Down), None);
    assert_eq!(price_to_usable_tick(-3.0, 0, 60, Rounding::Down), None);
}

// ── Input parsing ────────────────────────────────────────────────────

#[test]
fn test_parse_price_input() {
    assert_eq!(parse_concentrated_price_input("1,234.5"), Some(1234.5));
    assert_eq!(parse_concentrated_price_input(" 0.0001 "), Some(0.0001));
    assert_eq!(parse_concentrated_price_input("0"), None);
    assert_eq!(parse_concentrated_price_input("-5"), None);
    assert_eq!(parse_concentrated_price_input("abc"), None);
    assert_eq!(parse_concentrated_price_input(""), None);
    assert_eq!(parse_concentrated_price_input("Infinity"), None);
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_concentrated_amount("1e3"), Some(1000.0));
    assert_eq!(parse_concentrated_amount("10,000"), Some(10_000.0));
    assert_eq!(parse_concentrated_amount("0.0"), None);
}

#[test]
fn test_parse_percent() {
    assert_eq!(parse_concentrated_percent("0"), Some(0.0));
    assert_eq!(parse_concentrated_percent("12.5%"), Some(12.5));
    assert_eq!(parse_concentrated_percent("-1"), None);
    assert_eq!(parse_concentrated_percent("%"), None);
}

// ── Display ──────────────────────────────────────────────────────────

#[test]
fn test_format_fixed_range() {
    assert_eq!(format_concentrated_price(1234.5), "1234.5");
    assert_eq!(format_concentrated_price(2.0), "2");
    assert_eq!(format_concentrated_price(1.23456789), "1.234568");
    assert_eq!(format_concentrated_price(0.5), "0.5");
    assert_eq!(format_concentrated_price(0.000123), "0.000123");
    assert_eq!(format_concentrated_price(999_999_999.5), "999999999.5");
}

#[test]
fn test_format_exponential_range() {
    assert_eq!(format_concentrated_price(1.5e9), "1.5e+9");
    assert_eq!(format_concentrated_price(1e-7), "1e-7");
    assert_eq!(format_concentrated_amount(2.5e-7), "2.5e-7");
    assert_eq!(format_concentrated_amount(-4e10), "-4e+10");
}

#[test]
fn test_format_degenerate() {
    assert_eq!(format_concentrated_price(0.0), "0");
    assert_eq!(format_concentrated_price(f64::NAN), "0");
    assert_eq!(format_concentrated_amount(f64::INFINITY), "0");
}
