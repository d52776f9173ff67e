use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::decimal::{coerce_decimal, de_decimal, de_timestamp, seconds_to_ms};

/// A third-party incentive stream layered on top of a pool's own rewards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PoolIncentiveInfo {
    pub info: IncentiveStream,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IncentiveStream {
    /// Incentive tokens emitted per second, decimal string.
    #[serde(deserialize_with = "de_decimal")]
    pub tps: String,
    /// End of the incentive period, unix seconds.
    #[serde(deserialize_with = "de_timestamp")]
    pub expired_at: u64,
}

impl IncentiveStream {
    pub fn tps(&self) -> f64 {
        coerce_decimal(&self.tps)
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        seconds_to_ms(self.expired_at) < now_ms
    }
}
