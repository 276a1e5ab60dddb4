//! Orderings over probe results.

use std::cmp::Ordering;

use tracing::debug;

use crate::RankedResult;

/// Results sorted ascending by loss rate, then by delay.
///
/// Only [`rank_by_latency`] builds this type, and the filters in
/// [`crate::filter`] only shrink it, so the early-exit scans always see
/// sorted input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyRanked(Vec<RankedResult>);

impl LatencyRanked {
    pub(crate) fn from_sorted(results: Vec<RankedResult>) -> Self {
        Self(results)
    }

    pub fn as_slice(&self) -> &[RankedResult] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<RankedResult> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedResult> {
        self.0.iter()
    }
}

impl IntoIterator for LatencyRanked {
    type Item = RankedResult;
    type IntoIter = std::vec::IntoIter<RankedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LatencyRanked {
    type Item = &'a RankedResult;
    type IntoIter = std::slice::Iter<'a, RankedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Loss rate ascending, delay ascending on ties
pub fn compare_latency(a: &RankedResult, b: &RankedResult) -> Ordering {
    a.loss_rate()
        .total_cmp(&b.loss_rate())
        .then_with(|| a.delay().cmp(&b.delay()))
}

/// Stable sort by (loss rate, delay).
pub fn rank_by_latency(mut results: Vec<RankedResult>) -> LatencyRanked {
    results.sort_by(compare_latency);
    debug!("Ranked {} results by loss rate and delay", results.len());
    LatencyRanked(results)
}

/// Stable sort by download speed, fastest first.
pub fn rank_by_speed(mut results: Vec<RankedResult>) -> Vec<RankedResult> {
    results.sort_by(|a, b| b.download_speed.total_cmp(&a.download_speed));
    debug!("Ranked {} results by download speed", results.len());
    results
}
