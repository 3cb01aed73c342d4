use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analysis;
use crate::completeness;
use crate::config::ScoringConfig;
use crate::models::{PcrDocument, Scenario};
use crate::narrative;
use crate::scores::{AiSuggestion, CategoryScore, PcrScores, SuggestionPriority, SuggestionType};
use crate::treatment;
use crate::vitals;

pub fn score_document(
    document: &PcrDocument,
    scenario: &Scenario,
    config: &ScoringConfig,
) -> PcrScores {
    score_document_at(document, scenario, config, Utc::now())
}

/// Scores a document as of `now`, which becomes the result timestamp and the
/// end of the completion-time window.
pub fn score_document_at(
    document: &PcrDocument,
    scenario: &Scenario,
    config: &ScoringConfig,
    now: DateTime<Utc>,
) -> PcrScores {
    let narrative = narrative::score(&document.narrative, scenario);
    let vitals = vitals::score(&document.assessment.vital_signs);
    let treatment = treatment::score(document, scenario);
    let completeness = completeness::score(document);

    let mut suggestions = Vec::new();
    tag_suggestions(
        &mut suggestions,
        &narrative,
        "Narrative",
        SuggestionType::Improvement,
        SuggestionPriority::Medium,
    );
    tag_suggestions(
        &mut suggestions,
        &vitals,
        "Vitals",
        SuggestionType::Correction,
        SuggestionPriority::High,
    );
    tag_suggestions(
        &mut suggestions,
        &treatment,
        "Treatment",
        SuggestionType::Improvement,
        SuggestionPriority::High,
    );
    if config.include_completeness_suggestions {
        tag_suggestions(
            &mut suggestions,
            &completeness,
            "Completeness",
            SuggestionType::Correction,
            SuggestionPriority::Low,
        );
    }

    let categories = vec![narrative, vitals, treatment, completeness];
    for category in &categories {
        debug!(
            document = %document.id,
            category = %category.category,
            score = category.score,
            max_score = category.max_score,
            "category scored"
        );
    }

    let overall = overall_score(&categories);
    let ai_analysis = analysis::analyze(&document.narrative, overall, suggestions);

    PcrScores {
        overall,
        categories,
        ai_analysis,
        completion_time: completion_minutes(document.created_at, now),
        timestamp: now,
    }
}

/// Percentage of available points earned, rounded half away from zero.
pub fn overall_score(categories: &[CategoryScore]) -> u32 {
    let earned: u32 = categories.iter().map(|c| c.score).sum();
    let available: u32 = categories.iter().map(|c| c.max_score).sum();
    if available == 0 {
        return 0;
    }

    (f64::from(earned) / f64::from(available) * 100.0).round() as u32
}

pub fn completion_minutes(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    created_at
        .map(|start| (now - start).num_minutes().max(0))
        .map(|minutes| u32::try_from(minutes).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn tag_suggestions(
    out: &mut Vec<AiSuggestion>,
    score: &CategoryScore,
    category: &str,
    kind: SuggestionType,
    priority: SuggestionPriority,
) {
    out.extend(score.suggestions.iter().map(|suggestion| AiSuggestion {
        kind,
        priority,
        category: category.to_string(),
        suggestion: suggestion.clone(),
        example: None,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn category(score: u32, max_score: u32) -> CategoryScore {
        CategoryScore {
            category: "Test".to_string(),
            score,
            max_score,
            feedback: String::new(),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn overall_is_rounded_mean() {
        let categories = [100, 50, 100, 100].map(|score| category(score, 100));
        assert_eq!(overall_score(&categories), 88);

        let categories = [0, 0, 90, 100].map(|score| category(score, 100));
        assert_eq!(overall_score(&categories), 48);
    }

    #[test]
    fn overall_guards_zero_max() {
        assert_eq!(overall_score(&[]), 0);
        assert_eq!(overall_score(&[category(0, 0)]), 0);
    }

    #[test]
    fn completion_minutes_from_created_at() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 14, 45, 0).unwrap();
        assert_eq!(completion_minutes(Some(now - Duration::minutes(17)), now), 17);
        assert_eq!(completion_minutes(Some(now + Duration::minutes(5)), now), 0);
        assert_eq!(completion_minutes(None, now), 0);
    }

    #[test]
    fn empty_document_scores_every_category() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 14, 45, 0).unwrap();
        let scores = score_document_at(
            &PcrDocument::default(),
            &Scenario::default(),
            &ScoringConfig::default(),
            now,
        );

        let names: Vec<_> = scores.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Narrative Quality",
                "Vitals Documentation",
                "Clinical Management",
                "PCR Completeness"
            ]
        );
        // 0 + 0 + 100 + 70 over 400
        assert_eq!(scores.overall, 43);
        assert_eq!(scores.timestamp, now);
        assert_eq!(scores.completion_time, 0);
    }

    #[test]
    fn suggestions_are_tagged_by_category() {
        let scores = score_document(
            &PcrDocument::default(),
            &Scenario::default(),
            &ScoringConfig::default(),
        );
        let suggestions = &scores.ai_analysis.suggestions;

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions[..4].iter().all(|s| s.category == "Narrative"
            && s.kind == SuggestionType::Improvement
            && s.priority == SuggestionPriority::Medium));
        assert_eq!(suggestions[4].category, "Vitals");
        assert_eq!(suggestions[4].kind, SuggestionType::Correction);
        assert_eq!(suggestions[4].priority, SuggestionPriority::High);
    }

    #[test]
    fn completeness_suggestions_stay_in_their_category_by_default() {
        let scores = score_document(
            &PcrDocument::default(),
            &Scenario::default(),
            &ScoringConfig::default(),
        );
        assert_eq!(scores.categories[3].suggestions.len(), 5);
        assert!(scores
            .ai_analysis
            .suggestions
            .iter()
            .all(|s| s.category != "Completeness"));
    }

    #[test]
    fn config_flag_propagates_completeness_suggestions() {
        let config = ScoringConfig {
            include_completeness_suggestions: true,
        };
        let scores = score_document(&PcrDocument::default(), &Scenario::default(), &config);
        let completeness: Vec<_> = scores
            .ai_analysis
            .suggestions
            .iter()
            .filter(|s| s.category == "Completeness")
            .collect();

        assert_eq!(completeness.len(), 5);
        assert!(completeness.iter().all(|s| {
            s.kind == SuggestionType::Correction && s.priority == SuggestionPriority::Low
        }));
    }
}
