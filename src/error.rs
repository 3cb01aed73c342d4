use std::path::PathBuf;

use thiserror::Error;

/// Failures at the file boundary. Scoring itself cannot fail.
#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}

pub type Result<T> = std::result::Result<T, ScorerError>;
