//! End-to-end processing of a finished measurement set.
//!
//! rank by (loss, delay) → delay window → loss ceiling → optional speed
//! ranking → per-colo cap → export → console table

use anyhow::Context;
use tracing::info;

use crate::{
    args::SortOrder,
    export::{self, ExportPaths},
    group::cap_per_colo,
    rank::{rank_by_latency, rank_by_speed},
    report, Config, RankedResult, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub results: Vec<RankedResult>,
    pub exported: Option<ExportPaths>,
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rank, filter and cap without touching the filesystem or stdout.
    pub fn process(&self, results: Vec<RankedResult>) -> Vec<RankedResult> {
        let total = results.len();
        let filtered = rank_by_latency(results)
            .filter_delay(&self.config)
            .filter_loss_rate(&self.config);
        let passed = filtered.len();

        let ordered = match self.config.sort {
            SortOrder::Speed => rank_by_speed(filtered.into_inner()),
            SortOrder::Latency => filtered.into_inner(),
        };
        let limited = cap_per_colo(&ordered, self.config.colo_limit);

        info!(
            "{} measurements, {} passed filters, {} kept after per-colo limit of {}",
            total,
            passed,
            limited.len(),
            self.config.colo_limit
        );
        limited
    }

    /// Process the results, write the export files and print the table.
    pub fn run(&self, results: Vec<RankedResult>) -> Result<PipelineOutput> {
        let results = self.process(results);
        let exported = export::export(&results, &self.config).context("failed to export results")?;
        report::print_results(&results, &self.config, exported.as_ref());
        Ok(PipelineOutput { results, exported })
    }
}
