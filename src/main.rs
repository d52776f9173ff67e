use clap::Parser;

use aqua_estimates::config::CalcConfig;
use aqua_estimates::schema;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = CalcConfig::from_env(cli.now_ms, cli.verbose)?;

    match cli.command {
        cli::Command::Schema => schema::run(),
        cli::Command::Boost { rewards, balance } => commands::boost(&config, &rewards, balance),
        cli::Command::EstimateBoost { rewards, shares } => {
            commands::estimate_boost(&config, &rewards, shares)
        }
        cli::Command::Daily { rewards, incentive } => {
            commands::daily(&config, &rewards, incentive.as_deref())
        }
        cli::Command::EstimateDaily {
            rewards,
            incentive,
            shares,
            account_share,
        } => commands::estimate_daily(
            &config,
            &rewards,
            incentive.as_deref(),
            shares,
            account_share,
        ),
        cli::Command::TickToPrice {
            tick,
            decimals_diff,
        } => commands::tick_to_price(tick, decimals_diff),
        cli::Command::PriceToTick {
            price,
            decimals_diff,
            spacing,
        } => commands::price_to_tick(&config, &price, decimals_diff, spacing),
        cli::Command::Normalize { file } => commands::normalize(&config, &file),
        cli::Command::Format {
            value,
            abbreviate,
            percent,
        } => commands::format_value(value, abbreviate, percent),
    }
}
