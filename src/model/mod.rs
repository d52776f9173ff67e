pub mod decimal;
pub mod incentive;
pub mod position;
pub mod rewards;

pub use decimal::coerce_decimal;
pub use incentive::{IncentiveStream, PoolIncentiveInfo};
pub use position::ConcentratedPosition;
pub use rewards::{PoolRewardsInfo, RewardFigures};
