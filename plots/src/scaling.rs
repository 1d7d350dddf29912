use common::aggregate::{AggregatedPoint, ChartSeries, series_for};
use tracing::warn;

/// The scaling figure is a fixed 2x3 grid; operations past the sixth get no
/// panel. Benchmark suites rarely exceed six operations and the grid never
/// grows to accommodate more.
pub const MAX_PANELS: usize = 6;
pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 3;

/// A composed multi-panel figure, one panel per operation. Plain data; the
/// render sink turns it into an artifact.
#[derive(Debug, Clone)]
pub struct ScalingFigure {
    pub title: String,
    pub panels: Vec<ChartSeries>,
}

/// One line-chart panel per operation, in first-seen order, capped at
/// [`MAX_PANELS`].
pub fn compose_scaling(
    points: &[AggregatedPoint],
    operations: &[String],
    title: &str,
) -> ScalingFigure {
    if operations.len() > MAX_PANELS {
        warn!(
            "{} operations but only {MAX_PANELS} panels; dropping {:?}",
            operations.len(),
            &operations[MAX_PANELS..]
        );
    }
    let panels = operations
        .iter()
        .take(MAX_PANELS)
        .map(|operation| series_for(points, operation))
        .collect();
    ScalingFigure {
        title: title.to_owned(),
        panels,
    }
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
    fn seventh_operation_gets_no_panel() {
        let operations: Vec<String> = (0..7).map(|i| format!("op{i}")).collect();
        let points: Vec<_> = operations
            .iter()
            .map(|op| point(op, 10, 1.0))
            .collect();

        let figure = compose_scaling(&points, &operations, "Scaling");
        assert_eq!(figure.panels.len(), MAX_PANELS);
        assert!(figure.panels.iter().all(|p| p.operation != "op6"));
    }

    #[test]
    fn panels_follow_first_seen_order() {
        let operations = vec!["search".to_owned(), "insert".to_owned()];
        let points = vec![point("insert", 10, 1.0), point("search", 10, 0.5)];

        let figure = compose_scaling(&points, &operations, "Scaling");
        let order: Vec<_> = figure.panels.iter().map(|p| p.operation.as_str()).collect();
        assert_eq!(order, ["search", "insert"]);
    }

    #[test]
    fn panel_series_are_sorted_by_size() {
        let operations = vec!["insert".to_owned()];
        let points = vec![
            point("insert", 1000, 9.0),
            point("insert", 10, 1.0),
            point("insert", 100, 4.0),
        ];

        let figure = compose_scaling(&points, &operations, "Scaling");
        assert_eq!(figure.panels[0].points, [(10, 1.0), (100, 4.0), (1000, 9.0)]);
    }
}
