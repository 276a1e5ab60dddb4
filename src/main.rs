use anyhow::Context;
use clap::Parser;
use iprank::{input, Args, Config, Pipeline, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the result table, so logs go to stderr
    let default_filter = if args.verbose { "iprank=debug" } else { "iprank=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting iprank v{}", env!("CARGO_PKG_VERSION"));

    let results = match args.input.as_deref() {
        Some(path) if !args.simulate => input::load(path)
            .with_context(|| format!("failed to load measurements from {path}"))?,
        _ => input::simulate(args.simulate_count),
    };

    let pipeline = Pipeline::new(Config::from(&args));
    pipeline.run(results)?;

    Ok(())
}
