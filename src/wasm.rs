use wasm_bindgen::prelude::*;

use crate::concentrated::{self, Rounding};
use crate::input::{incentive_from_str, rewards_from_str};
use crate::{format, rewards};

// Records cross the boundary as JSON strings; `"null"` or anything
// undecodable counts as absent info.

#[wasm_bindgen(js_name = calculateBoostValue)]
pub fn calculate_boost_value(rewards_json: &str, user_balance: f64) -> f64 {
    rewards::calculate_boost_value(rewards_from_str(rewards_json).as_ref(), user_balance)
}

#[wasm_bindgen(js_name = estimateBoostValue)]
pub fn estimate_boost_value(rewards_json: &str, shares_after: f64) -> f64 {
    rewards::estimate_boost_value(rewards_from_str(rewards_json).as_ref(), shares_after)
}

#[wasm_bindgen(js_name = calculateDailyRewards)]
pub fn calculate_daily_rewards(rewards_json: &str) -> f64 {
    rewards::calculate_daily_rewards(rewards_from_str(rewards_json).as_ref())
}

#[wasm_bindgen(js_name = calculateDailyIncentives)]
pub fn calculate_daily_incentives(rewards_json: &str, incentive_json: &str) -> f64 {
    rewards::calculate_daily_incentives(
        rewards_from_str(rewards_json).as_ref(),
        incentive_from_str(incentive_json).as_ref(),
    )
}

#[wasm_bindgen(js_name = estimateDailyRewards)]
pub fn estimate_daily_rewards(rewards_json: &str, shares_after: f64, account_share: f64) -> f64 {
    rewards::estimate_daily_rewards(
        rewards_from_str(rewards_json).as_ref(),
        shares_after,
        account_share,
    )
}

#[wasm_bindgen(js_name = estimateDailyIncentives)]
pub fn estimate_daily_incentives(
    rewards_json: &str,
    incentive_json: &str,
    shares_after: f64,
    account_share: f64,
) -> f64 {
    rewards::estimate_daily_incentives(
        rewards_from_str(rewards_json).as_ref(),
        incentive_from_str(incentive_json).as_ref(),
        shares_after,
        account_share,
    )
}

#[wasm_bindgen(js_name = tickToPrice)]
pub fn tick_to_price(tick: f64, decimals_diff: i32) -> f64 {
    concentrated::tick_to_price(tick, decimals_diff)
}

#[wasm_bindgen(js_name = priceToTick)]
pub fn price_to_tick(price: f64, decimals_diff: i32) -> f64 {
    concentrated::price_to_tick(price, decimals_diff)
}

/// `rounding` is `"down"`, `"up"` or anything else for nearest.
#[wasm_bindgen(js_name = priceToUsableTick)]
pub fn price_to_usable_tick(
    price: f64,
    decimals_diff: i32,
    spacing: i32,
    rounding: &str,
) -> Option<i32> {
    let rounding = match rounding {
        "down" => Rounding::Down,
        "up" => Rounding::Up,
        _ => Rounding::Nearest,
    };
    concentrated::price_to_usable_tick(price, decimals_diff, spacing, rounding)
}

#[wasm_bindgen(js_name = snapDown)]
pub fn snap_down(value: f64, spacing: f64) -> f64 {
    concentrated::snap_down(value, spacing)
}

#[wasm_bindgen(js_name = snapUp)]
pub fn snap_up(value: f64, spacing: f64) -> f64 {
    concentrated::snap_up(value, spacing)
}

#[wasm_bindgen]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    concentrated::clamp(value, min, max)
}

#[wasm_bindgen(js_name = parseConcentratedPriceInput)]
pub fn parse_concentrated_price_input(text: &str) -> Option<f64> {
    concentrated::parse_concentrated_price_input(text)
}

#[wasm_bindgen(js_name = parseConcentratedAmount)]
pub fn parse_concentrated_amount(text: &str) -> Option<f64> {
    concentrated::parse_concentrated_amount(text)
}

#[wasm_bindgen(js_name = parseConcentratedPercent)]
pub fn parse_concentrated_percent(text: &str) -> Option<f64> {
    concentrated::parse_concentrated_percent(text)
}

#[wasm_bindgen(js_name = formatConcentratedPrice)]
pub fn format_concentrated_price(value: f64) -> String {
    concentrated::format_concentrated_price(value)
}

#[wasm_bindgen(js_name = formatConcentratedAmount)]
pub fn format_concentrated_amount(value: f64) -> String {
    concentrated::format_concentrated_amount(value)
}

/// Takes the snapshot as a JSON string and returns an array of
/// `{tickLower, tickUpper, liquidity}` objects. Undecodable input yields `[]`.
#[wasm_bindgen(js_name = normalizePositions)]
pub fn normalize_positions(snapshot_json: &str) -> JsValue {
    let positions = concentrated::normalize_positions_str(snapshot_json);
    serde_wasm_bindgen::to_value(&positions).unwrap_or_else(|_| empty_array())
}

fn empty_array() -> JsValue {
    serde_wasm_bindgen::to_value(&Vec::<()>::new()).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = roundToPrecision)]
pub fn round_to_precision(value: f64, num_decimals: u32) -> String {
    format::round_to_precision(value, num_decimals)
}

#[wasm_bindgen(js_name = formatBalance)]
pub fn format_balance(value: f64, abbreviate: bool) -> String {
    format::format_balance(value, abbreviate)
}

#[wasm_bindgen(js_name = formatPercent)]
pub fn format_percent(value: f64) -> String {
    format::format_percent(value)
}

#[wasm_bindgen]
pub fn get_schema() -> String {
    crate::schema::get_schema_json()
}
