use common::aggregate::{AggregatedPoint, ChartSeries};

/// A composed grouped bar chart over the common size domain: one bar group
/// per size, one bar per operation within each group.
#[derive(Debug, Clone)]
pub struct ComparisonFigure {
    pub title: String,
    pub sizes: Vec<u64>,
    pub series: Vec<ChartSeries>,
}

/// Horizontal offset of the i-th of `n` bars from its group center. The bars
/// end up centered as a block within the group slot, without overlap.
pub fn bar_offset(index: usize, n: usize, bar_width: f64) -> f64 {
    (index as f64 - n as f64 / 2.0 + 0.5) * bar_width
}

/// Composes the cross-operation comparison restricted to `common_sizes`.
/// Returns [`None`] when the operations share no size: there is nothing
/// apples-to-apples to draw, which is an expected outcome and not an error.
pub fn compose_comparison(
    points: &[AggregatedPoint],
    operations: &[String],
    common_sizes: &[u64],
    title: &str,
) -> Option<ComparisonFigure> {
    if common_sizes.is_empty() {
        return None;
    }
    let series = operations
        .iter()
        .map(|operation| {
            let points = points
                .iter()
                .filter(|p| p.operation == *operation && common_sizes.contains(&p.size))
                .map(|p| (p.size, p.mean_time_ms))
                .collect();
            ChartSeries {
                operation: operation.clone(),
                points,
            }
        })
        .collect();
    Some(ComparisonFigure {
        title: title.to_owned(),
        sizes: common_sizes.to_vec(),
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(operation: &str, size: u64, mean_time_ms: f64) -> AggregatedPoint {
        AggregatedPoint {
            operation: operation.to_owned(),
            size,
            mean_time_ms,
        }
    }

    #[test]
    fn empty_domain_yields_no_figure() {
        let points = vec![point("insert", 10, 1.0), point("search", 100, 2.0)];
        let operations = vec!["insert".to_owned(), "search".to_owned()];
        assert!(compose_comparison(&points, &operations, &[], "Comparison").is_none());
    }

    #[test]
    fn sizes_outside_the_common_domain_are_excluded() {
        let points = vec![
            point("insert", 10, 1.0),
            point("insert", 100, 4.0),
            point("insert", 100_000, 9.0),
            point("search", 10, 0.5),
            point("search", 100, 2.0),
        ];
        let operations = vec!["insert".to_owned(), "search".to_owned()];

        let figure = compose_comparison(&points, &operations, &[10, 100], "Comparison").unwrap();
        assert_eq!(figure.sizes, [10, 100]);
        assert_eq!(figure.series[0].points, [(10, 1.0), (100, 4.0)]);
        assert_eq!(figure.series[1].points, [(10, 0.5), (100, 2.0)]);
    }

    #[test]
    fn offsets_center_the_group() {
        // Two bars straddle the center.
        assert_eq!(bar_offset(0, 2, 0.4), -0.2);
        assert_eq!(bar_offset(1, 2, 0.4), 0.2);
        // A lone bar sits on it.
        assert_eq!(bar_offset(0, 1, 0.4), 0.0);
        // The block as a whole is centered.
        let total: f64 = (0..5).map(|i| bar_offset(i, 5, 0.16)).sum();
        assert!(total.abs() < 1e-12);
    }
}
