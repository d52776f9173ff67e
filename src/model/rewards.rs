use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::decimal::{coerce_decimal, de_decimal, de_timestamp, seconds_to_ms};

/// Pool-wide reward emission and stake figures, as served by the rewards API.
///
/// Numeric fields are decimal strings. The API is not consistent about
/// quoting, so bare JSON numbers are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PoolRewardsInfo {
    /// Reward tokens emitted per second.
    #[serde(deserialize_with = "de_decimal")]
    pub tps: String,
    /// Sum of all boosted (working) balances in the pool.
    #[serde(deserialize_with = "de_decimal")]
    pub working_supply: String,
    /// The account's boosted (working) balance.
    #[serde(deserialize_with = "de_decimal")]
    pub working_balance: String,
    /// Total pool shares.
    #[serde(deserialize_with = "de_decimal")]
    pub supply: String,
    /// Total locked balance backing boosts.
    #[serde(deserialize_with = "de_decimal")]
    pub boost_supply: String,
    /// The account's locked balance backing its boost.
    #[serde(deserialize_with = "de_decimal")]
    pub boost_balance: String,
    /// End of the reward period, unix seconds.
    #[serde(deserialize_with = "de_timestamp")]
    pub exp_at: u64,
}

/// [`PoolRewardsInfo`] with every field coerced to `f64` once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardFigures {
    pub tps: f64,
    pub working_supply: f64,
    pub working_balance: f64,
    pub supply: f64,
    pub boost_supply: f64,
    pub boost_balance: f64,
    /// End of the reward period, unix milliseconds.
    pub expires_at_ms: i64,
}

impl PoolRewardsInfo {
    pub fn figures(&self) -> RewardFigures {
        RewardFigures {
            tps: coerce_decimal(&self.tps),
            working_supply: coerce_decimal(&self.working_supply),
            working_balance: coerce_decimal(&self.working_balance),
            supply: coerce_decimal(&self.supply),
            boost_supply: coerce_decimal(&self.boost_supply),
            boost_balance: coerce_decimal(&self.boost_balance),
            expires_at_ms: seconds_to_ms(self.exp_at),
        }
    }
}

impl RewardFigures {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at_ms < now_ms
    }
}
