//! Balance and percentage formatting with magnitude-adaptive precision.

pub mod abbreviate;
pub mod precision;

pub use abbreviate::abbreviate_number;
pub use precision::{format_balance, format_percent, precision_for, round_to_precision};
