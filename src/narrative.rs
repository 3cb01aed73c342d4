use crate::models::{NarrativeSection, Scenario};
use crate::scores::CategoryScore;
use crate::terms::FoldedText;

pub const CATEGORY: &str = "Narrative Quality";
pub const MAX_SCORE: u32 = 100;
pub const SECTION_POINTS: u32 = 25;
pub const HISTORY_MIN_CHARS: usize = 20;
pub const SUMMARY_MIN_CHARS: usize = 10;
pub const STRONG_THRESHOLD: u32 = 80;
pub const KEYWORD_MIN_CHARS: usize = 3;

pub fn score(narrative: &NarrativeSection, scenario: &Scenario) -> CategoryScore {
    let sections = [
        ("Subjective", narrative.subjective.as_str(), HISTORY_MIN_CHARS),
        ("Objective", narrative.objective.as_str(), HISTORY_MIN_CHARS),
        ("Assessment", narrative.assessment.as_str(), SUMMARY_MIN_CHARS),
        ("Plan", narrative.plan.as_str(), SUMMARY_MIN_CHARS),
    ];

    let mut score = 0;
    let mut suggestions = Vec::new();

    for (name, text, min_chars) in sections {
        if text.chars().count() > min_chars {
            score += SECTION_POINTS;
        } else {
            suggestions.push(format!("{name} section is too brief or missing."));
        }
    }

    let chief_complaint = scenario.patient_presentation.chief_complaint.as_str();
    if !references_chief_complaint(narrative, chief_complaint) {
        suggestions.push(format!(
            "Consider mentioning key terms from the chief complaint: {chief_complaint}"
        ));
    }

    let feedback = if score > STRONG_THRESHOLD {
        "Excellent narrative structure."
    } else {
        "Narrative needs more detail."
    };

    CategoryScore {
        category: CATEGORY.to_string(),
        score,
        max_score: MAX_SCORE,
        feedback: feedback.to_string(),
        suggestions,
    }
}

/// Words of the chief complaint longer than three characters, lowercased.
pub fn complaint_keywords(chief_complaint: &str) -> Vec<String> {
    chief_complaint
        .split_whitespace()
        .filter(|token| token.chars().count() > KEYWORD_MIN_CHARS)
        .map(str::to_lowercase)
        .collect()
}

/// True when at least half of the complaint keywords appear somewhere in the
/// SOAP text. A complaint without keywords is always referenced.
pub fn references_chief_complaint(narrative: &NarrativeSection, chief_complaint: &str) -> bool {
    let keywords = complaint_keywords(chief_complaint);
    let text = FoldedText::new(&narrative.soap_text());
    let found = keywords
        .iter()
        .filter(|keyword| text.contains(keyword))
        .count();

    found * 2 >= keywords.len()
}
