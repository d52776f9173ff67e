use super::estimate::{nan_min, Estimate, NeutralReason};
use crate::model::{PoolRewardsInfo, RewardFigures};

/// Weight of the locked balance when it tops up a working balance.
pub const LOCK_WEIGHT: f64 = 1.5;

/// A working balance never exceeds this multiple of the raw share count.
pub const MAX_BOOST: f64 = 2.5;

/// Boost the account currently receives, relative to an unboosted share of
/// `user_balance`.
///
/// Absent info gives 0. Zero tps, working supply or working balance means no
/// boost mechanism is active and gives 1, as does a zero unboosted rate.
pub fn calculate_boost_value(rewards: Option<&PoolRewardsInfo>, user_balance: f64) -> f64 {
    boost_value(rewards, user_balance).resolve(match rewards {
        None => 0.0,
        Some(_) => 1.0,
    })
}

pub fn boost_value(rewards: Option<&PoolRewardsInfo>, user_balance: f64) -> Estimate {
    let Some(rewards) = rewards else {
        return Estimate::Neutral(NeutralReason::MissingInput);
    };
    let f = rewards.figures();
    if f.tps == 0.0 || f.working_supply == 0.0 || f.working_balance == 0.0 {
        return Estimate::Neutral(NeutralReason::Inactive);
    }

    let expected_rate = f.tps * f.working_balance / f.working_supply;
    let unboosted_rate = user_balance * f.tps / f.working_supply;
    if unboosted_rate == 0.0 {
        return Estimate::Neutral(NeutralReason::ZeroDenominator);
    }

    Estimate::checked(expected_rate / unboosted_rate)
}

/// Boost the account would have after holding `shares_after` pool shares.
/// Absent info gives 1.
pub fn estimate_boost_value(rewards: Option<&PoolRewardsInfo>, shares_after: f64) -> f64 {
    estimated_boost(rewards, shares_after).resolve(1.0)
}

pub fn estimated_boost(rewards: Option<&PoolRewardsInfo>, shares_after: f64) -> Estimate {
    let Some(rewards) = rewards else {
        return Estimate::Neutral(NeutralReason::MissingInput);
    };
    let working_balance = boosted_working_balance(&rewards.figures(), shares_after);
    Estimate::checked(working_balance / shares_after)
}

/// Working balance for `shares_after` shares: the shares plus a bonus for
/// the account's share of locked supply, capped at [`MAX_BOOST`] times the
/// shares.
pub(crate) fn boosted_working_balance(f: &RewardFigures, shares_after: f64) -> f64 {
    nan_min(
        shares_after + LOCK_WEIGHT * f.boost_balance * f.supply / f.boost_supply,
        shares_after * MAX_BOOST,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figures(supply: f64, boost_supply: f64, boost_balance: f64) -> RewardFigures {
        RewardFigures {
            tps: 1.0,
            working_supply: 1.0,
            working_balance: 1.0,
            supply,
            boost_supply,
            boost_balance,
            expires_at_ms: 0,
        }
    }

    #[test]
    fn working_balance_is_capped() {
        let f = figures(1000.0, 10.0, 10.0);
        assert_eq!(boosted_working_balance(&f, 100.0), 250.0);
    }

    #[test]
    fn working_balance_below_cap() {
        // 100 + 1.5 * 1 * 1000 / 100 = 115
        let f = figures(1000.0, 100.0, 1.0);
        assert_eq!(boosted_working_balance(&f, 100.0), 115.0);
    }

    #[test]
    fn zero_boost_supply_without_lock_is_nan() {
        let f = figures(1000.0, 0.0, 0.0);
        assert!(boosted_working_balance(&f, 100.0).is_nan());
    }
}
