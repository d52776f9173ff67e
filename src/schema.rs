use schemars::schema_for;
use serde_json::json;

use crate::model::{ConcentratedPosition, PoolIncentiveInfo, PoolRewardsInfo};

/// JSON Schemas of the records the calculators consume and produce, keyed
/// by record name.
pub fn get_schema_json() -> String {
    let schemas = json!({
        "PoolRewardsInfo": schema_for!(PoolRewardsInfo),
        "PoolIncentiveInfo": schema_for!(PoolIncentiveInfo),
        "ConcentratedPosition": schema_for!(ConcentratedPosition),
    });
    serde_json::to_string_pretty(&schemas).unwrap_or_else(|e| {
        json!({ "error": format!("Serialization error: {}", e) }).to_string()
    })
}

/// Print the schemas for the `schema` subcommand.
pub fn run() -> anyhow::Result<()> {
    println!("{}", get_schema_json());
    Ok(())
}
