use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use aqua_estimates::concentrated::{self, Rounding};
use aqua_estimates::config::CalcConfig;
use aqua_estimates::format;
use aqua_estimates::input::{self, InputError};
use aqua_estimates::rewards;

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn boost(config: &CalcConfig, rewards_path: &Path, balance: f64) -> Result<()> {
    let info = input::load_rewards(rewards_path)?;
    let estimate = rewards::boost::boost_value(info.as_ref(), balance);
    if config.verbose {
        eprintln!("[boost] balance {} -> {:?}", balance, estimate);
    }
    print_json(&json!({
        "boost": rewards::boost::calculate_boost_value(info.as_ref(), balance),
        "estimate": estimate,
    }))
}

pub fn estimate_boost(config: &CalcConfig, rewards_path: &Path, shares: f64) -> Result<()> {
    let info = input::load_rewards(rewards_path)?;
    let estimate = rewards::boost::estimated_boost(info.as_ref(), shares);
    if config.verbose {
        eprintln!("[boost] shares after {} -> {:?}", shares, estimate);
    }
    print_json(&json!({
        "boost": rewards::boost::estimate_boost_value(info.as_ref(), shares),
        "estimate": estimate,
    }))
}

pub fn daily(config: &CalcConfig, rewards_path: &Path, incentive_path: Option<&Path>) -> Result<()> {
    let info = input::load_rewards(rewards_path)?;
    let incentive = match incentive_path {
        Some(path) => input::load_incentive(path)?,
        None => None,
    };
    let now_ms = config.now_ms();
    let reward_estimate = rewards::daily::daily_rewards(info.as_ref(), now_ms);
    let incentive_estimate = rewards::daily::daily_incentives(info.as_ref(), incentive.as_ref(), now_ms);
    if config.verbose {
        eprintln!(
            "[daily] now={} rewards={:?} incentives={:?}",
            now_ms, reward_estimate, incentive_estimate
        );
    }
    let rewards_per_day = rewards::daily::calculate_daily_rewards_at(info.as_ref(), now_ms);
    let incentives_per_day =
        rewards::daily::calculate_daily_incentives_at(info.as_ref(), incentive.as_ref(), now_ms);
    print_json(&json!({
        "now_ms": now_ms,
        "daily_rewards": rewards_per_day,
        "daily_rewards_display": format::format_balance(rewards_per_day, true),
        "daily_incentives": incentives_per_day,
        "daily_incentives_display": format::format_balance(incentives_per_day, true),
    }))
}

pub fn estimate_daily(
    config: &CalcConfig,
    rewards_path: &Path,
    incentive_path: Option<&Path>,
    shares: f64,
    account_share: f64,
) -> Result<()> {
    let info = input::load_rewards(rewards_path)?;
    let incentive = match incentive_path {
        Some(path) => input::load_incentive(path)?,
        None => None,
    };
    if config.verbose {
        eprintln!(
            "[daily] projecting {} shares (currently {})",
            shares, account_share
        );
    }
    let rewards_per_day = rewards::daily::estimate_daily_rewards(info.as_ref(), shares, account_share);
    let incentives_per_day =
        rewards::daily::estimate_daily_incentives(info.as_ref(), incentive.as_ref(), shares, account_share);
    print_json(&json!({
        "boost": rewards::boost::estimate_boost_value(info.as_ref(), shares),
        "daily_rewards": rewards_per_day,
        "daily_incentives": incentives_per_day,
    }))
}

pub fn tick_to_price(tick: f64, decimals_diff: i32) -> Result<()> {
    let price = concentrated::tick_to_price(tick, decimals_diff);
    print_json(&json!({
        "tick": tick,
        "price": price,
        "display": concentrated::format_concentrated_price(price),
    }))
}

pub fn price_to_tick(
    config: &CalcConfig,
    price_text: &str,
    decimals_diff: i32,
    spacing: Option<i32>,
) -> Result<()> {
    let price = concentrated::parse_concentrated_price_input(price_text)
        .ok_or_else(|| InputError::invalid("price", format!("`{price_text}` is not a positive number")))?;
    let tick = concentrated::price_to_tick(price, decimals_diff);
    if config.verbose {
        eprintln!("[tick] price {} -> raw tick {}", price, tick);
    }

    let mut out = json!({ "price": price, "tick": tick });
    if let Some(spacing) = spacing {
        let (lower_bound, upper_bound) = concentrated::usable_tick_bounds(spacing);
        out["spacing"] = json!(spacing);
        out["tick_down"] = json!(concentrated::price_to_usable_tick(price, decimals_diff, spacing, Rounding::Down));
        out["tick_up"] = json!(concentrated::price_to_usable_tick(price, decimals_diff, spacing, Rounding::Up));
        out["tick_nearest"] = json!(concentrated::price_to_usable_tick(price, decimals_diff, spacing, Rounding::Nearest));
        out["usable_bounds"] = json!([lower_bound, upper_bound]);
    }
    print_json(&out)
}

pub fn normalize(config: &CalcConfig, path: &Path) -> Result<()> {
    let snapshot: serde_json::Value = input::load_json(path)
        .with_context(|| format!("loading snapshot {}", path.display()))?;
    let positions = concentrated::normalize_positions_json(&snapshot);
    if config.verbose {
        eprintln!("[normalize] {} position(s) in {}", positions.len(), path.display());
    }
    println!("{}", serde_json::to_string_pretty(&positions)?);
    Ok(())
}

pub fn format_value(value: f64, abbreviate: bool, percent: bool) -> Result<()> {
    let text = if percent {
        format::format_percent(value)
    } else {
        format::format_balance(value, abbreviate)
    };
    println!("{text}");
    Ok(())
}
