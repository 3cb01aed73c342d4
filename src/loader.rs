use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog;
use crate::config::ScoringConfig;
use crate::error::{Result, ScorerError};
use crate::history::ScoreHistory;
use crate::models::{PcrDocument, Scenario};
use crate::{completeness, narrative, scoring, treatment, vitals};

pub fn load_document(path: &Path) -> Result<PcrDocument> {
    read_json(path)
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    read_json(path)
}

/// Reads `reference` as a scenario file when it exists on disk, otherwise
/// looks it up in the built-in catalog.
pub fn resolve_scenario(reference: &str) -> Result<Scenario> {
    let path = Path::new(reference);
    if path.is_file() {
        return load_scenario(path);
    }

    catalog::find(reference)
        .cloned()
        .ok_or_else(|| ScorerError::UnknownScenario(reference.to_string()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| ScorerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ScorerError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestRow {
    pub document: PathBuf,
    pub scenario: String,
}

pub fn read_manifest(path: &Path) -> Result<Vec<ManifestRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<ManifestRow>() {
        rows.push(result?);
    }
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub document_id: String,
    pub scenario_id: String,
    pub overall: u32,
    pub narrative: u32,
    pub vitals: u32,
    pub treatment: u32,
    pub completeness: u32,
    pub suggestions: usize,
    pub attempt: usize,
    pub improvement: i64,
}

pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|source| ScorerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Scores every manifest row in order. Relative document and scenario paths
/// resolve against the manifest's directory. Rows that cannot be loaded are
/// logged and skipped.
pub fn score_manifest(manifest: &Path, config: &ScoringConfig) -> Result<Vec<SummaryRow>> {
    let base = manifest.parent().unwrap_or_else(|| Path::new(""));
    let mut histories: HashMap<String, ScoreHistory> = HashMap::new();
    let mut summary = Vec::new();

    for (index, row) in read_manifest(manifest)?.into_iter().enumerate() {
        let loaded = load_document(&base.join(&row.document)).and_then(|document| {
            let scenario = resolve_scenario(&scenario_reference(base, &row.scenario))?;
            Ok((document, scenario))
        });
        let (document, scenario) = match loaded {
            Ok(pair) => pair,
            Err(err) => {
                warn!(row = index + 1, error = %err, "skipping manifest row");
                continue;
            }
        };

        let scores = scoring::score_document(&document, &scenario, config);
        let document_id = if document.id.is_empty() {
            row.document.display().to_string()
        } else {
            document.id.clone()
        };
        info!(document = %document_id, scenario = %scenario.id, overall = scores.overall, "scored");

        let category = |name: &str| scores.category(name).map_or(0, |c| c.score);
        let mut row = SummaryRow {
            document_id: document_id.clone(),
            scenario_id: scenario.id.clone(),
            overall: scores.overall,
            narrative: category(narrative::CATEGORY),
            vitals: category(vitals::CATEGORY),
            treatment: category(treatment::CATEGORY),
            completeness: category(completeness::CATEGORY),
            suggestions: scores.ai_analysis.suggestions.len(),
            attempt: 0,
            improvement: 0,
        };

        let history = histories
            .entry(document_id.clone())
            .or_insert_with(|| ScoreHistory::new(document_id));
        history.record(scores);
        row.attempt = history.attempts();
        row.improvement = history.improvement();
        summary.push(row);
    }

    Ok(summary)
}

fn scenario_reference(base: &Path, reference: &str) -> String {
    let candidate = base.join(reference);
    if candidate.is_file() {
        candidate.display().to_string()
    } else {
        reference.to_string()
    }
}
