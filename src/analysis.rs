//! Heuristic narrative and clinical breakdown derived from the SOAP text and
//! the overall score.
//!
//! Several sub-metrics are not measured from content yet. They are exposed as
//! named constants so a real measurement can replace each one independently.

use crate::models::NarrativeSection;
use crate::scores::{
    AiAnalysis, AiSuggestion, ClinicalAnalysis, CompletenessAnalysis, NarrativeAnalysis,
};
use crate::terms;

pub const SUBSCORE_CEILING: u32 = 10;
pub const WORDS_PER_THOROUGHNESS_POINT: usize = 20;
pub const TERMS_PER_TERMINOLOGY_POINT: usize = 2;
pub const CLARITY_BASE: f64 = 5.0;
pub const CLARITY_DIVISOR: f64 = 20.0;

pub const OBJECTIVITY_PLACEHOLDER: u32 = 8;
pub const ORGANIZATION_PLACEHOLDER: u32 = 9;
pub const GRAMMAR_PLACEHOLDER: u32 = 8;
pub const TREATMENT_APPROPRIATENESS_PLACEHOLDER: u32 = 8;
pub const PROTOCOL_COMPLIANCE_PLACEHOLDER: u32 = 9;
pub const CRITICAL_THINKING_PLACEHOLDER: u32 = 7;
pub const TIMELINESS_PLACEHOLDER: u32 = 10;

pub fn thoroughness(word_count: usize) -> u32 {
    (word_count / WORDS_PER_THOROUGHNESS_POINT).min(SUBSCORE_CEILING as usize) as u32
}

pub fn terminology(term_count: usize) -> u32 {
    (term_count / TERMS_PER_TERMINOLOGY_POINT).min(SUBSCORE_CEILING as usize) as u32
}

pub fn clarity(overall: u32) -> f64 {
    (CLARITY_BASE + f64::from(overall) / CLARITY_DIVISOR).min(f64::from(SUBSCORE_CEILING))
}

pub fn assessment_accuracy(overall: u32) -> u32 {
    (overall / 10).min(SUBSCORE_CEILING)
}

pub fn professionalism(thoroughness: u32, terminology: u32, clarity: f64) -> u32 {
    let mean = (f64::from(thoroughness) + f64::from(terminology) + clarity) / 3.0;
    (mean * 10.0).round() as u32
}

pub fn analyze(
    narrative: &NarrativeSection,
    overall: u32,
    suggestions: Vec<AiSuggestion>,
) -> AiAnalysis {
    let text = narrative.soap_text();
    let thoroughness = thoroughness(terms::word_count(&text));
    let terminology = terminology(terms::count_medical_terms(&text));
    let clarity = clarity(overall);

    AiAnalysis {
        narrative_quality: NarrativeAnalysis {
            clarity,
            objectivity: OBJECTIVITY_PLACEHOLDER,
            thoroughness,
            organization: ORGANIZATION_PLACEHOLDER,
            grammar_score: GRAMMAR_PLACEHOLDER,
            medical_terminology_usage: terminology,
        },
        clinical_accuracy: ClinicalAnalysis {
            assessment_accuracy: assessment_accuracy(overall),
            treatment_appropriateness: TREATMENT_APPROPRIATENESS_PLACEHOLDER,
            protocol_compliance: PROTOCOL_COMPLIANCE_PLACEHOLDER,
            critical_thinking_score: CRITICAL_THINKING_PLACEHOLDER,
        },
        completeness: CompletenessAnalysis {
            required_fields_completed: overall,
            missing_elements: Vec::new(),
            excessive_elements: Vec::new(),
            timeliness_score: TIMELINESS_PLACEHOLDER,
        },
        professionalism_score: professionalism(thoroughness, terminology, clarity),
        suggestions,
    }
}
