use crate::models::{PcrDocument, Scenario};
use crate::scores::CategoryScore;
use crate::terms::FoldedText;

pub const CATEGORY: &str = "Clinical Management";
pub const MAX_SCORE: u32 = 100;

/// Text the required treatments are searched in.
struct TreatmentCorpus {
    medications: FoldedText,
    procedures: FoldedText,
    narrative: FoldedText,
}

impl TreatmentCorpus {
    fn from_document(document: &PcrDocument) -> Self {
        let medications = document
            .treatment
            .medications
            .iter()
            .map(|m| m.medication.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let procedures = document
            .treatment
            .procedures
            .iter()
            .map(|p| p.procedure.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        // Serialized whole, so field names like "plan" are part of the corpus.
        let narrative = serde_json::to_string(&document.narrative).unwrap_or_default();

        Self {
            medications: FoldedText::new(&medications),
            procedures: FoldedText::new(&procedures),
            narrative: FoldedText::new(&narrative),
        }
    }

    fn mentions(&self, element: &str) -> bool {
        self.medications.contains(element)
            || self.procedures.contains(element)
            || self.narrative.contains(element)
    }
}

pub fn score(document: &PcrDocument, scenario: &Scenario) -> CategoryScore {
    let corpus = TreatmentCorpus::from_document(document);
    let mut score = MAX_SCORE;
    let mut suggestions = Vec::new();

    for requirement in scenario.required_treatments() {
        if corpus.mentions(&requirement.element) {
            continue;
        }

        score = score.saturating_sub(requirement.effective_weight());
        suggestions.push(format!("Missed required treatment: {}", requirement.element));
    }

    let feedback = if score == MAX_SCORE {
        "Appropriate treatment plan."
    } else {
        "Missed key clinical interventions."
    };

    CategoryScore {
        category: CATEGORY.to_string(),
        score,
        max_score: MAX_SCORE,
        feedback: feedback.to_string(),
        suggestions,
    }
}
