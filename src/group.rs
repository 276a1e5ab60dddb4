use indexmap::IndexMap;
use tracing::debug;

use crate::RankedResult;

/// Bucket results by colocation code.
///
/// Buckets appear in the order their code is first seen and keep the input
/// order inside each bucket.
pub fn group_by_colo(results: &[RankedResult]) -> IndexMap<&str, Vec<&RankedResult>> {
    let mut colos: IndexMap<&str, Vec<&RankedResult>> = IndexMap::new();
    for result in results {
        colos.entry(result.colo()).or_default().push(result);
    }
    colos
}

/// Keep at most `limit` results per colocation, concatenating buckets in
/// first-seen order.
pub fn cap_per_colo(results: &[RankedResult], limit: usize) -> Vec<RankedResult> {
    let colos = group_by_colo(results);
    let bucket_count = colos.len();

    let limited: Vec<RankedResult> = colos
        .into_values()
        .flat_map(|bucket| bucket.into_iter().take(limit))
        .cloned()
        .collect();

    debug!(
        "Capped {} results in {} colos to {} (limit {})",
        results.len(),
        bucket_count,
        limited.len(),
        limit
    );
    limited
}
