use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scores::PcrScores;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: Uuid,
    pub scores: PcrScores,
}

/// Submissions of one document in the order they were scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreHistory {
    pub document_id: String,
    entries: Vec<ScoreRecord>,
}

impl ScoreHistory {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, scores: PcrScores) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(ScoreRecord { id, scores });
        id
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn attempts(&self) -> usize {
        self.entries.len()
    }

    pub fn latest(&self) -> Option<&ScoreRecord> {
        self.entries.last()
    }

    /// Highest overall score; the earliest submission wins a tie.
    pub fn best(&self) -> Option<&ScoreRecord> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(current) if current.scores.overall >= entry.scores.overall => Some(current),
            _ => Some(entry),
        })
    }

    /// Change in overall score from the first submission to the latest.
    pub fn improvement(&self) -> i64 {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => {
                i64::from(last.scores.overall) - i64::from(first.scores.overall)
            }
            _ => 0,
        }
    }
}
