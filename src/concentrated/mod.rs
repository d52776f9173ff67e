//! Concentrated-liquidity helpers: price/tick conversion, range input
//! parsing and display, and position extraction from pool snapshots.

pub mod format;
pub mod input;
pub mod normalize;
pub mod tick;

pub use format::{format_concentrated_amount, format_concentrated_price};
pub use input::{parse_concentrated_amount, parse_concentrated_percent, parse_concentrated_price_input};
pub use normalize::{
    normalize_positions, normalize_positions_json, normalize_positions_str, NodeId, Snapshot,
    SnapshotNode,
};
pub use tick::{
    clamp, nearest_usable_tick, price_to_tick, price_to_usable_tick, snap_down, snap_up,
    tick_to_price, usable_tick_bounds, Rounding, MAX_TICK, MIN_TICK, TICK_BASE,
};
