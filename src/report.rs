use std::fmt::Write;

use crate::models::{PcrDocument, Scenario};
use crate::scores::{AiSuggestion, PcrScores};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSummary {
    pub category: String,
    pub count: usize,
}

pub fn summarize_by_category(suggestions: &[AiSuggestion]) -> Vec<SuggestionSummary> {
    let mut map: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();

    for suggestion in suggestions {
        *map.entry(suggestion.category.as_str()).or_insert(0) += 1;
    }

    let mut summaries: Vec<SuggestionSummary> = map
        .into_iter()
        .map(|(category, count)| SuggestionSummary {
            category: category.to_string(),
            count,
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    summaries
}

pub fn build_report(document: &PcrDocument, scenario: &Scenario, scores: &PcrScores) -> String {
    let mut output = String::new();
    let title = if scenario.title.is_empty() {
        scenario.id.as_str()
    } else {
        scenario.title.as_str()
    };

    let document_label = if document.id.is_empty() {
        "unsaved"
    } else {
        document.id.as_str()
    };

    let _ = writeln!(output, "# PCR Performance Report");
    let _ = writeln!(
        output,
        "Scenario {} (document {}, scored {})",
        title,
        document_label,
        scores.timestamp.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "Overall score: {}%", scores.overall);

    if let Some(criteria) = scenario.scoring_criteria {
        let verdict = if scores.overall >= criteria.passing_score {
            "PASS"
        } else {
            "FAIL"
        };
        let _ = writeln!(output, "Passing score: {}% ({})", criteria.passing_score, verdict);
    }
    if scores.completion_time > 0 {
        let _ = writeln!(output, "Completion time: {} min", scores.completion_time);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Category Breakdown");

    for category in scores.categories.iter() {
        let _ = writeln!(
            output,
            "- {}: {}/{} - {}",
            category.category, category.score, category.max_score, category.feedback
        );
        for suggestion in category.suggestions.iter() {
            let _ = writeln!(output, "  - {}", suggestion);
        }
    }

    let narrative = &scores.ai_analysis.narrative_quality;
    let clinical = &scores.ai_analysis.clinical_accuracy;
    let _ = writeln!(output);
    let _ = writeln!(output, "## Narrative Analysis");
    let _ = writeln!(output, "- Clarity: {:.1}/10", narrative.clarity);
    let _ = writeln!(output, "- Thoroughness: {}/10", narrative.thoroughness);
    let _ = writeln!(
        output,
        "- Medical terminology: {}/10",
        narrative.medical_terminology_usage
    );
    let _ = writeln!(output, "- Objectivity: {}/10", narrative.objectivity);
    let _ = writeln!(
        output,
        "- Assessment accuracy: {}/10",
        clinical.assessment_accuracy
    );
    let _ = writeln!(
        output,
        "- Professionalism: {}/100",
        scores.ai_analysis.professionalism_score
    );

    let summaries = summarize_by_category(&scores.ai_analysis.suggestions);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Suggestions");

    if summaries.is_empty() {
        let _ = writeln!(output, "No suggestions. Nice work.");
    } else {
        for summary in summaries.iter() {
            let _ = writeln!(output, "### {} ({})", summary.category, summary.count);
            for suggestion in scores
                .ai_analysis
                .suggestions
                .iter()
                .filter(|s| s.category == summary.category)
            {
                let _ = writeln!(
                    output,
                    "- [{:?}] {}",
                    suggestion.priority, suggestion.suggestion
                );
                if let Some(example) = &suggestion.example {
                    let _ = writeln!(output, "  Example: {}", example);
                }
            }
        }
    }

    output
}
