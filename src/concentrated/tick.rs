/// Price ratio between adjacent ticks: one basis point.
pub const TICK_BASE: f64 = 1.0001;

pub const MIN_TICK: i32 = -887_272;
pub const MAX_TICK: i32 = 887_272;

/// `ln(TICK_BASE)`.
pub fn tick_log_base() -> f64 {
    TICK_BASE.ln()
}

/// `TICK_BASE^tick * 10^decimals_diff`.
pub fn tick_to_price(tick: f64, decimals_diff: i32) -> f64 {
    TICK_BASE.powf(tick) * 10f64.powi(decimals_diff)
}

/// Inverse of [`tick_to_price`]. Not rounded: snap the result to the pool's
/// spacing with [`snap_down`] / [`snap_up`].
pub fn price_to_tick(price: f64, decimals_diff: i32) -> f64 {
    (price * 10f64.powi(-decimals_diff)).ln() / tick_log_base()
}

/// Largest multiple of `spacing` not above `value`. A spacing that is not
/// a positive finite number leaves `value` as is.
pub fn snap_down(value: f64, spacing: f64) -> f64 {
    if !valid_spacing(spacing) {
        return value;
    }
    (value / spacing).floor() * spacing
}

/// Smallest multiple of `spacing` not below `value`.
pub fn snap_up(value: f64, spacing: f64) -> f64 {
    if !valid_spacing(spacing) {
        return value;
    }
    (value / spacing).ceil() * spacing
}

fn snap_nearest(value: f64, spacing: f64) -> f64 {
    if !valid_spacing(spacing) {
        return value;
    }
    (value / spacing).round() * spacing
}

fn valid_spacing(spacing: f64) -> bool {
    spacing.is_finite() && spacing > 0.0
}

/// Clamp without panicking on inverted bounds; `max` wins when they cross.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
    Nearest,
}

/// Lowest and highest ticks aligned to `spacing`. Non-positive spacing is
/// treated as 1.
pub fn usable_tick_bounds(spacing: i32) -> (i32, i32) {
    let spacing = spacing.max(1);
    // Integer division truncates toward zero, which keeps both bounds inside
    // the tick domain.
    ((MIN_TICK / spacing) * spacing, (MAX_TICK / spacing) * spacing)
}

/// `tick` rounded to the nearest multiple of `spacing`, kept within the
/// usable bounds.
pub fn nearest_usable_tick(tick: i32, spacing: i32) -> i32 {
    let spacing = spacing.max(1);
    let (lo, hi) = usable_tick_bounds(spacing);
    let snapped = snap_nearest(f64::from(tick), f64::from(spacing));
    clamp(snapped, f64::from(lo), f64::from(hi)) as i32
}

/// Tick for `price`, aligned to `spacing` in the given direction and kept
/// within the usable bounds. `None` when the price has no tick (zero,
/// negative or not finite).
pub fn price_to_usable_tick(
    price: f64,
    decimals_diff: i32,
    spacing: i32,
    rounding: Rounding,
) -> Option<i32> {
    let raw = price_to_tick(price, decimals_diff);
    if !raw.is_finite() {
        return None;
    }
    let spacing = spacing.max(1);
    let step = f64::from(spacing);
    let snapped = match rounding {
        Rounding::Down => snap_down(raw, step),
        Rounding::Up => snap_up(raw, step),
        Rounding::Nearest => snap_nearest(raw, step),
    };
    let (lo, hi) = usable_tick_bounds(spacing);
    Some(clamp(snapped, f64::from(lo), f64::from(hi)) as i32)
}
