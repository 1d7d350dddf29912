use std::fs::create_dir_all;

use common::{
    aggregate::{aggregate, common_sizes},
    config::Config,
    error::VizError,
    sample::SampleStore,
};
use plots::{
    comparison::compose_comparison,
    render::{render_comparison, render_scaling},
    scaling::compose_scaling,
};
use tracing::{debug, warn};

const COMPARISON_TITLE: &str = "Performance Comparison Across Operations";

/// Runs the whole pipeline: load, aggregate, compose and persist both
/// figures. Strictly sequential; the comparison chart is skipped when the
/// operations share no input size.
pub fn run(config: &Config) -> Result<(), VizError> {
    let store = SampleStore::load(&config.input)?;
    let operations = store.operations();
    debug!("Operations: {operations:?}");

    let points = aggregate(store.into_samples());
    debug!("{} aggregated points", points.len());

    create_dir_all(&config.out_dir).map_err(|source| VizError::Persistence {
        path: config.out_dir.clone(),
        source: Box::new(source),
    })?;

    let scaling = compose_scaling(&points, &operations, &config.title);
    let scaling_path = config.scaling_path();
    render_scaling(&scaling, &scaling_path)?;

    let sizes = common_sizes(&points, &operations);
    match compose_comparison(&points, &operations, &sizes, COMPARISON_TITLE) {
        Some(comparison) => {
            let comparison_path = config.comparison_path();
            render_comparison(&comparison, &comparison_path)?;
            println!(
                "Visualizations have been saved as '{}' and '{}'",
                scaling_path.display(),
                comparison_path.display()
            );
        }
        None => {
            warn!("No common size across operations, skipping comparison chart");
            println!(
                "Visualization has been saved as '{}'",
                scaling_path.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;
    use std::path::Path;

    use common::{config::Config, error::VizError};

    use super::run;

    fn config_for(dir: &Path, csv: &str) -> Config {
        let input = dir.join("results.csv");
        write(&input, csv).unwrap();
        Config {
            input,
            out_dir: dir.join("charts"),
            ..Config::default()
        }
    }

    #[test]
    fn produces_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(
            dir.path(),
            "operation,size,time_ms\n\
             insert,10,1.0\n\
             insert,10,3.0\n\
             insert,100,5.0\n\
             search,10,0.5\n\
             search,100,2.0\n",
        );

        run(&config).unwrap();
        assert!(config.scaling_path().exists());
        assert!(config.comparison_path().exists());
    }

    #[test]
    fn missing_input_produces_no_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: dir.path().join("absent.csv"),
            out_dir: dir.path().join("charts"),
            ..Config::default()
        };

        let err = run(&config).unwrap_err();
        assert!(matches!(err, VizError::InputNotFound(_)));
        assert!(!config.scaling_path().exists());
        assert!(!config.comparison_path().exists());
    }

    #[test]
    fn disjoint_domains_skip_the_comparison_chart() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(
            dir.path(),
            "operation,size,time_ms\ninsert,10,1.0\nsearch,100,2.0\n",
        );

        run(&config).unwrap();
        assert!(config.scaling_path().exists());
        assert!(!config.comparison_path().exists());
    }

    #[test]
    fn reruns_are_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(
            dir.path(),
            "operation,size,time_ms\n\
             insert,10,1.0\n\
             insert,10,3.0\n\
             search,10,0.5\n",
        );

        run(&config).unwrap();
        let first = std::fs::read(config.scaling_path()).unwrap();
        run(&config).unwrap();
        let second = std::fs::read(config.scaling_path()).unwrap();
        assert_eq!(first, second);
    }
}
