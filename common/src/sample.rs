use std::path::Path;

use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::error::VizError;

pub const REQUIRED_COLUMNS: &[&str] = &["operation", "size", "time_ms"];

/// One raw measurement row. Duplicate (operation, size) keys are expected;
/// they are the unit the aggregation step reduces over.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSample {
    pub operation: String,
    pub size: u64,
    pub time_ms: f64,
}

#[derive(Debug)]
pub struct SampleStore {
    samples: Vec<RawSample>,
}

impl SampleStore {
    /// Loads the raw measurement table. The header is checked up front so a
    /// missing column fails here and not halfway through aggregation.
    /// Columns are looked up by name; extra columns are ignored.
    pub fn load(path: &Path) -> Result<Self, VizError> {
        if !path.exists() {
            return Err(VizError::InputNotFound(path.to_path_buf()));
        }
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| VizError::InputMalformed(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| VizError::InputMalformed(e.to_string()))?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(VizError::InputMalformed(format!(
                    "missing column '{column}'"
                )));
            }
        }

        let mut samples = Vec::new();
        for (row, result) in reader.deserialize::<RawSample>().enumerate() {
            let sample =
                result.map_err(|e| VizError::InputMalformed(format!("row {}: {e}", row + 1)))?;
            samples.push(sample);
        }
        if samples.is_empty() {
            return Err(VizError::InputMalformed("table has no rows".to_owned()));
        }
        debug!("Loaded {} samples from {}", samples.len(), path.display());
        Ok(Self { samples })
    }

    /// Distinct operations in first-seen order. The order is stable, never
    /// sorted; it drives panel assignment and bar colors downstream.
    pub fn operations(&self) -> Vec<String> {
        self.samples
            .iter()
            .map(|s| s.operation.clone())
            .unique()
            .collect()
    }

    pub fn into_samples(self) -> Vec<RawSample> {
        self.samples
    }
}
