use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("malformed input: {0}")]
    InputMalformed(String),
    #[error("failed to write {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
