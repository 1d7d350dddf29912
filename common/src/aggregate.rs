use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::sample::RawSample;

/// Mean elapsed time for one (operation, size) key. Keys with no samples do
/// not exist as points.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedPoint {
    pub operation: String,
    pub size: u64,
    pub mean_time_ms: f64,
}

/// One operation's (size, mean time) sequence, sorted by size ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub operation: String,
    pub points: Vec<(u64, f64)>,
}

/// Reduces every (operation, size) group to its arithmetic mean.
///
/// Group members are summed in value order rather than input order, so the
/// output is bit-identical for any permutation of the input rows. Points come
/// back sorted by (operation, size).
pub fn aggregate(samples: Vec<RawSample>) -> Vec<AggregatedPoint> {
    let groups: BTreeMap<(String, u64), Vec<f64>> = samples
        .into_iter()
        .map(|s| ((s.operation, s.size), s.time_ms))
        .into_group_map()
        .into_iter()
        .collect();

    groups
        .into_iter()
        .map(|((operation, size), mut times)| {
            times.sort_by(f64::total_cmp);
            let mean_time_ms = times.iter().sum::<f64>() / times.len() as f64;
            AggregatedPoint {
                operation,
                size,
                mean_time_ms,
            }
        })
        .collect()
}

/// Sizes present for every operation, ascending. An operation with no points
/// collapses the intersection to empty; that is a valid outcome, not an
/// error.
pub fn common_sizes(points: &[AggregatedPoint], operations: &[String]) -> Vec<u64> {
    let mut common: Option<BTreeSet<u64>> = None;
    for operation in operations {
        let sizes: BTreeSet<u64> = points
            .iter()
            .filter(|p| p.operation == *operation)
            .map(|p| p.size)
            .collect();
        common = Some(match common {
            None => sizes,
            Some(acc) => acc.intersection(&sizes).copied().collect(),
        });
    }
    common.unwrap_or_default().into_iter().collect()
}

/// The renderable series for one operation.
pub fn series_for(points: &[AggregatedPoint], operation: &str) -> ChartSeries {
    let points = points
        .iter()
        .filter(|p| p.operation == operation)
        .map(|p| (p.size, p.mean_time_ms))
        .sorted_by_key(|&(size, _)| size)
        .collect();
    ChartSeries {
        operation: operation.to_owned(),
        points,
    }
}
