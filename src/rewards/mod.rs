//! Reward and boost estimation for liquidity providers.
//!
//! Every calculator here is display-only: missing or degenerate input
//! degrades to a neutral value (0 reward, 1x boost) instead of an error.
//! Internally each one yields an [`Estimate`], resolved to the function's
//! neutral value at the public boundary.

pub mod boost;
pub mod daily;
pub mod estimate;

pub use boost::{calculate_boost_value, estimate_boost_value};
pub use daily::{
    calculate_daily_incentives, calculate_daily_incentives_at, calculate_daily_rewards,
    calculate_daily_rewards_at, estimate_daily_incentives, estimate_daily_rewards,
};
pub use estimate::{Estimate, NeutralReason};

/// Length of a day in milliseconds.
pub const DAY_MS: u64 = 86_400_000;

/// Seconds in a day, derived from [`DAY_MS`].
pub const SECONDS_PER_DAY: f64 = (DAY_MS / 1000) as f64;
