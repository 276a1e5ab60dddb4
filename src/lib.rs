pub mod args;
pub mod config;
pub mod export;
pub mod filter;
pub mod group;
pub mod input;
pub mod pipeline;
pub mod probe_result;
pub mod rank;
pub mod region;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use args::{Args, SortOrder};
pub use config::Config;
pub use pipeline::{Pipeline, PipelineOutput};
pub use probe_result::{ProbeResult, RankedResult};
pub use rank::LatencyRanked;

// Re-export external dependencies commonly used across modules
pub use anyhow::Result;
pub use std::net::IpAddr;
pub use std::time::Duration;
