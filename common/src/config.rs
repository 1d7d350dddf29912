use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Run configuration. Artifact names and the figure title live here so the
/// pipeline core stays independent of any particular output layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub scaling_chart: String,
    pub comparison_chart: String,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("performance_results.csv"),
            out_dir: PathBuf::from("."),
            scaling_chart: "performance.svg".to_owned(),
            comparison_chart: "performance_comparison.svg".to_owned(),
            title: "Performance Analysis".to_owned(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .context(format!("Read config {}", path.display()))?;
        serde_yml::from_str(&raw).context("Parse config")
    }

    pub fn scaling_path(&self) -> PathBuf {
        self.out_dir.join(&self.scaling_chart)
    }

    pub fn comparison_path(&self) -> PathBuf {
        self.out_dir.join(&self.comparison_chart)
    }
}
