use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
    pub max_score: u32,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Improvement,
    Correction,
    /// Accepted in stored results; the built-in scorers never emit it.
    Enhancement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub priority: SuggestionPriority,
    pub category: String,
    pub suggestion: String,
    /// Sample wording shown under the suggestion in reports. The built-in
    /// scorers leave it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeAnalysis {
    pub clarity: f64,
    pub objectivity: u32,
    pub thoroughness: u32,
    pub organization: u32,
    pub grammar_score: u32,
    pub medical_terminology_usage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAnalysis {
    pub assessment_accuracy: u32,
    pub treatment_appropriateness: u32,
    pub protocol_compliance: u32,
    pub critical_thinking_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessAnalysis {
    pub required_fields_completed: u32,
    pub missing_elements: Vec<String>,
    pub excessive_elements: Vec<String>,
    pub timeliness_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub narrative_quality: NarrativeAnalysis,
    pub clinical_accuracy: ClinicalAnalysis,
    pub completeness: CompletenessAnalysis,
    pub professionalism_score: u32,
    pub suggestions: Vec<AiSuggestion>,
}

/// Result of one scoring pass. A new value is produced per submission and is
/// never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcrScores {
    pub overall: u32,
    pub categories: Vec<CategoryScore>,
    pub ai_analysis: AiAnalysis,
    /// Minutes from document creation to scoring.
    pub completion_time: u32,
    pub timestamp: DateTime<Utc>,
}

impl PcrScores {
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use crate::models::NarrativeSection;

    #[test]
    fn suggestion_serializes_kind_as_type() {
        let suggestion = AiSuggestion {
            kind: SuggestionType::Correction,
            priority: SuggestionPriority::High,
            category: "Vitals".to_string(),
            suggestion: "Record a second set of vitals to show trending.".to_string(),
            example: None,
        };

        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["type"], "correction");
        assert_eq!(value["priority"], "high");
        assert!(value.get("example").is_none());
    }

    #[test]
    fn stored_enhancement_with_example_deserializes() {
        let json = r#"{
            "type": "enhancement",
            "priority": "low",
            "category": "Narrative",
            "suggestion": "Quote the patient directly.",
            "example": "Pt states \"it feels like an elephant on my chest\""
        }"#;

        let suggestion: AiSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.kind, SuggestionType::Enhancement);
        assert_eq!(
            suggestion.example.as_deref(),
            Some("Pt states \"it feels like an elephant on my chest\"")
        );
    }

    #[test]
    fn finds_categories_by_name() {
        let category = |name: &str, score: u32| CategoryScore {
            category: name.to_string(),
            score,
            max_score: 100,
            feedback: String::new(),
            suggestions: Vec::new(),
        };
        let scores = PcrScores {
            overall: 75,
            categories: vec![
                category("Narrative Quality", 50),
                category("PCR Completeness", 100),
            ],
            ai_analysis: analysis::analyze(&NarrativeSection::default(), 75, Vec::new()),
            completion_time: 0,
            timestamp: Utc::now(),
        };

        assert_eq!(scores.category("PCR Completeness").map(|c| c.score), Some(100));
        assert!(scores.category("Vitals Documentation").is_none());
    }
}
