use std::ops::Range;
use std::path::Path;

use common::error::VizError;
use plotters::prelude::*;
use tracing::debug;

use crate::comparison::{ComparisonFigure, bar_offset};
use crate::scaling::{GRID_COLS, GRID_ROWS, ScalingFigure};

const SCALING_SIZE: (u32, u32) = (1800, 1200);
const COMPARISON_SIZE: (u32, u32) = (1200, 800);

// Fraction of each group slot covered by bars.
const GROUP_WIDTH: f64 = 0.8;

type DrawResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Writes the scaling grid to `path`. A failure here never touches artifacts
/// written earlier in the run.
pub fn render_scaling(figure: &ScalingFigure, path: &Path) -> Result<(), VizError> {
    draw_scaling(figure, path).map_err(|source| VizError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Writes the comparison bars to `path`.
pub fn render_comparison(figure: &ComparisonFigure, path: &Path) -> Result<(), VizError> {
    draw_comparison(figure, path).map_err(|source| VizError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn draw_scaling(figure: &ScalingFigure, path: &Path) -> DrawResult {
    let root = SVGBackend::new(path, SCALING_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let titled = root.titled(&figure.title, ("sans-serif", 40))?;

    // Cells without an operation stay untouched, so they render as blank
    // background rather than empty axes.
    let cells = titled.split_evenly((GRID_ROWS, GRID_COLS));
    for (series, cell) in figure.panels.iter().zip(cells.iter()) {
        let (x_range, y_range) = panel_ranges(&series.points);
        let mut chart = ChartBuilder::on(cell)
            .caption(
                format!("{} Operation", capitalize(&series.operation)),
                ("sans-serif", 28),
            )
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.log_scale(), y_range)?;
        chart
            .configure_mesh()
            .x_desc("Number of Elements")
            .y_desc("Time (ms)")
            .draw()?;

        let pts: Vec<(f64, f64)> = series
            .points
            .iter()
            .map(|&(size, mean)| (size.max(1) as f64, mean))
            .collect();
        chart.draw_series(LineSeries::new(pts.clone(), BLUE.stroke_width(2)))?;
        chart.draw_series(pts.into_iter().map(|p| Circle::new(p, 4, BLUE.filled())))?;
    }

    root.present()?;
    Ok(())
}

fn draw_comparison(figure: &ComparisonFigure, path: &Path) -> DrawResult {
    let root = SVGBackend::new(path, COMPARISON_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let num_sizes = figure.sizes.len();
    let num_ops = figure.series.len();
    let y_max = figure
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.1))
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.2 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(num_sizes as f64 - 0.5), 0.0..y_max)?;

    let sizes = figure.sizes.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_sizes)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < sizes.len() && (x - idx as f64).abs() < 0.3 {
                sizes[idx].to_string()
            } else {
                String::new()
            }
        })
        .x_desc("Number of Elements")
        .y_desc("Time (ms)")
        .draw()?;

    let bar_width = GROUP_WIDTH / num_ops as f64;
    for (op_idx, series) in figure.series.iter().enumerate() {
        let color = Palette99::pick(op_idx).mix(1.0);
        let offset = bar_offset(op_idx, num_ops, bar_width);
        chart
            .draw_series(series.points.iter().map(|&(size, mean)| {
                let group = figure.sizes.iter().position(|&s| s == size).unwrap_or(0) as f64;
                let x_left = group + offset - bar_width / 2.0 + 0.02;
                let x_right = group + offset + bar_width / 2.0 - 0.02;
                Rectangle::new([(x_left, 0.0), (x_right, mean)], color.filled())
            }))?
            .label(capitalize(&series.operation))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Axis ranges for one panel. Sizes span orders of magnitude, so x is meant
/// for a log scale and must stay positive; a one-point series still needs a
/// non-degenerate range.
fn panel_ranges(points: &[(u64, f64)]) -> (Range<f64>, Range<f64>) {
    let x_min = points.iter().map(|p| p.0.max(1)).min().unwrap_or(1) as f64;
    let x_max = points.iter().map(|p| p.0.max(1)).max().unwrap_or(1) as f64;
    let (x_min, x_max) = if x_min == x_max {
        (x_min / 2.0, x_max * 2.0)
    } else {
        (x_min, x_max)
    };
    let y_max = points.iter().map(|p| p.1).fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    (x_min..x_max, 0.0..y_max)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
