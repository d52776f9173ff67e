//! Display-side estimators for Aquarius pools on Stellar: liquidity
//! provider boost and daily reward projections, concentrated-liquidity
//! tick math, and balance formatting.

pub mod clock;
pub mod concentrated;
pub mod config;
pub mod format;
pub mod input;
pub mod model;
pub mod rewards;
pub mod schema;

#[cfg(feature = "wasm")]
pub mod wasm;
