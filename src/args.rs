use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::DEFAULT_OUTPUT;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Fastest download first (ties keep loss/delay order)
    #[default]
    Speed,
    /// Lowest loss rate first, then lowest delay
    Latency,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "iprank")]
#[command(about = "Filter, rank and export per-address probe results grouped by colocation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["input", "simulate"])
))]
pub struct Args {
    /// JSON file with probe measurements ("-" reads stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Generate fake measurements instead of reading them
    #[arg(long)]
    pub simulate: bool,

    /// Number of records to generate in simulation mode
    #[arg(long, default_value = "64")]
    pub simulate_count: usize,

    /// Average delay upper bound in milliseconds
    #[arg(long = "tl", default_value = "9999")]
    pub max_delay: u64,

    /// Average delay lower bound in milliseconds
    #[arg(long = "tll", default_value = "0")]
    pub min_delay: u64,

    /// Loss rate upper bound (0.0-1.0)
    #[arg(long = "tlr", default_value = "1.0", value_parser = parse_loss_rate)]
    pub max_loss_rate: f64,

    /// CSV output path, an empty value disables file export
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Number of results to print, 0 disables console output
    #[arg(short, long, default_value = "10")]
    pub print_num: usize,

    /// Maximum number of results kept per colocation
    #[arg(long, default_value = "8")]
    pub colo_limit: usize,

    /// Final ordering of the results
    #[arg(long, value_enum, default_value = "speed")]
    pub sort: SortOrder,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_loss_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !rate.is_finite() || rate < 0.0 {
        return Err(format!("`{value}` must be a non-negative number"));
    }
    Ok(rate)
}
