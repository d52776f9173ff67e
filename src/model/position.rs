use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A concentrated-liquidity position: a tick range and the liquidity in it.
///
/// `tick_lower < tick_upper`, both inside `[MIN_TICK, MAX_TICK]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConcentratedPosition {
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Liquidity as a decimal string, `"0"` when the source had none.
    pub liquidity: String,
}

impl ConcentratedPosition {
    pub fn new(tick_lower: i32, tick_upper: i32, liquidity: impl Into<String>) -> Self {
        Self {
            tick_lower,
            tick_upper,
            liquidity: liquidity.into(),
        }
    }

    /// De-duplication key, `"tickLower:tickUpper"`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.tick_lower, self.tick_upper)
    }
}
