use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScorerError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// Also copy completeness suggestions into the aggregate suggestion list.
    /// Off by default, matching the trainer's feedback panel.
    pub include_completeness_suggestions: bool,
}

impl ScoringConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScorerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ScorerError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
