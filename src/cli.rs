use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aquarius pool estimators: boost, daily rewards, tick math and
/// balance formatting for liquidity providers.
#[derive(Parser)]
#[command(name = "aqua-estimates", version, about)]
pub struct Cli {
    /// Pin "now" to this unix timestamp in milliseconds (overrides AQUA_ESTIMATES_NOW_MS)
    #[arg(long, global = true)]
    pub now_ms: Option<i64>,

    /// Print diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Output the JSON schemas of the input records
    Schema,

    /// Current boost for an account's balance
    Boost {
        /// Path to a PoolRewardsInfo JSON file (`null` for absent info)
        #[arg(long)]
        rewards: PathBuf,

        /// The account's raw share balance
        #[arg(long)]
        balance: f64,
    },

    /// Boost after holding a hypothetical number of shares
    EstimateBoost {
        /// Path to a PoolRewardsInfo JSON file
        #[arg(long)]
        rewards: PathBuf,

        /// Pool shares held after the deposit
        #[arg(long)]
        shares: f64,
    },

    /// Daily rewards (and incentives) at the current working balance
    Daily {
        /// Path to a PoolRewardsInfo JSON file
        #[arg(long)]
        rewards: PathBuf,

        /// Path to a PoolIncentiveInfo JSON file
        #[arg(long)]
        incentive: Option<PathBuf>,
    },

    /// Projected daily rewards (and incentives) after a deposit
    EstimateDaily {
        /// Path to a PoolRewardsInfo JSON file
        #[arg(long)]
        rewards: PathBuf,

        /// Path to a PoolIncentiveInfo JSON file
        #[arg(long)]
        incentive: Option<PathBuf>,

        /// Pool shares held after the deposit
        #[arg(long)]
        shares: f64,

        /// Shares the account holds today
        #[arg(long, default_value = "0.0")]
        account_share: f64,
    },

    /// Convert a tick index to a price
    TickToPrice {
        #[arg(allow_negative_numbers = true)]
        tick: f64,

        /// Decimals of token1 minus decimals of token0
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        decimals_diff: i32,
    },

    /// Convert a price to a tick index, optionally aligned to a tick spacing
    PriceToTick {
        /// Price as typed, thousands separators allowed
        price: String,

        /// Decimals of token1 minus decimals of token0
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        decimals_diff: i32,

        /// Pool tick spacing
        #[arg(long)]
        spacing: Option<i32>,
    },

    /// Extract concentrated positions from a pool-state snapshot
    Normalize {
        /// Path to the snapshot JSON file
        file: PathBuf,
    },

    /// Format a number for display
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Abbreviate values above 1000 (K/M/B/T/Q)
        #[arg(long, conflicts_with = "percent")]
        abbreviate: bool,

        /// Format as a percentage
        #[arg(long)]
        percent: bool,
    },
}
