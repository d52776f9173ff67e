use super::boost::boosted_working_balance;
use super::estimate::{Estimate, NeutralReason};
use super::SECONDS_PER_DAY;
use crate::clock;
use crate::model::{PoolIncentiveInfo, PoolRewardsInfo, RewardFigures};

/// Rewards the account earns per day at its current working balance.
/// 0 when the info is absent or the reward period has ended.
pub fn calculate_daily_rewards(rewards: Option<&PoolRewardsInfo>) -> f64 {
    calculate_daily_rewards_at(rewards, clock::now_ms())
}

pub fn calculate_daily_rewards_at(rewards: Option<&PoolRewardsInfo>, now_ms: i64) -> f64 {
    daily_rewards(rewards, now_ms).resolve(0.0)
}

pub fn daily_rewards(rewards: Option<&PoolRewardsInfo>, now_ms: i64) -> Estimate {
    let Some(rewards) = rewards else {
        return Estimate::Neutral(NeutralReason::MissingInput);
    };
    let f = rewards.figures();
    if f.is_expired(now_ms) {
        return Estimate::Neutral(NeutralReason::Expired);
    }
    Estimate::checked(f.tps * SECONDS_PER_DAY * f.working_balance / f.working_supply)
}

/// Incentive tokens the account earns per day, using the pool's working
/// balance and supply with the incentive stream's emission rate.
/// 0 when either record is absent or the incentive has ended.
pub fn calculate_daily_incentives(
    rewards: Option<&PoolRewardsInfo>,
    incentive: Option<&PoolIncentiveInfo>,
) -> f64 {
    calculate_daily_incentives_at(rewards, incentive, clock::now_ms())
}

pub fn calculate_daily_incentives_at(
    rewards: Option<&PoolRewardsInfo>,
    incentive: Option<&PoolIncentiveInfo>,
    now_ms: i64,
) -> f64 {
    daily_incentives(rewards, incentive, now_ms).resolve(0.0)
}

pub fn daily_incentives(
    rewards: Option<&PoolRewardsInfo>,
    incentive: Option<&PoolIncentiveInfo>,
    now_ms: i64,
) -> Estimate {
    let (Some(rewards), Some(incentive)) = (rewards, incentive) else {
        return Estimate::Neutral(NeutralReason::MissingInput);
    };
    if incentive.info.is_expired(now_ms) {
        return Estimate::Neutral(NeutralReason::Expired);
    }
    let f = rewards.figures();
    Estimate::checked(incentive.info.tps() * SECONDS_PER_DAY * f.working_balance / f.working_supply)
}

/// Daily rewards the account would earn after replacing its current
/// `account_share` with `shares_after` shares. 0 when tps is zero.
pub fn estimate_daily_rewards(
    rewards: Option<&PoolRewardsInfo>,
    shares_after: f64,
    account_share: f64,
) -> f64 {
    projected_rewards(rewards, shares_after, account_share).resolve(0.0)
}

pub fn projected_rewards(
    rewards: Option<&PoolRewardsInfo>,
    shares_after: f64,
    account_share: f64,
) -> Estimate {
    let Some(rewards) = rewards else {
        return Estimate::Neutral(NeutralReason::MissingInput);
    };
    let f = rewards.figures();
    project(&f, f.tps, shares_after, account_share)
}

/// Incentive counterpart of [`estimate_daily_rewards`], emitting at the
/// incentive stream's rate.
pub fn estimate_daily_incentives(
    rewards: Option<&PoolRewardsInfo>,
    incentive: Option<&PoolIncentiveInfo>,
    shares_after: f64,
    account_share: f64,
) -> f64 {
    projected_incentives(rewards, incentive, shares_after, account_share).resolve(0.0)
}

pub fn projected_incentives(
    rewards: Option<&PoolRewardsInfo>,
    incentive: Option<&PoolIncentiveInfo>,
    shares_after: f64,
    account_share: f64,
) -> Estimate {
    let (Some(rewards), Some(incentive)) = (rewards, incentive) else {
        return Estimate::Neutral(NeutralReason::MissingInput);
    };
    project(
        &rewards.figures(),
        incentive.info.tps(),
        shares_after,
        account_share,
    )
}

fn project(f: &RewardFigures, tps: f64, shares_after: f64, account_share: f64) -> Estimate {
    // NaN counts as falsy here too.
    if tps == 0.0 || tps.is_nan() {
        return Estimate::Neutral(NeutralReason::Inactive);
    }
    let working_balance = boosted_working_balance(f, shares_after);
    let working_supply = f.working_supply - account_share + shares_after;
    Estimate::checked(tps * working_balance * SECONDS_PER_DAY / working_supply)
}
