use crate::models::PcrDocument;
use crate::scores::CategoryScore;

pub const CATEGORY: &str = "PCR Completeness";
pub const MAX_SCORE: u32 = 100;

pub const ADDRESS_PENALTY: u32 = 5;
pub const AGE_PENALTY: u32 = 5;
pub const GENDER_PENALTY: u32 = 5;
pub const DESTINATION_PENALTY: u32 = 10;
pub const UNIT_PENALTY: u32 = 5;

pub fn score(document: &PcrDocument) -> CategoryScore {
    let checks = [
        (
            document.incident.address.is_empty(),
            ADDRESS_PENALTY,
            "Incident address missing.",
        ),
        (
            !matches!(document.patient.age, Some(age) if age.abs() > 0.0),
            AGE_PENALTY,
            "Patient age missing.",
        ),
        (
            document.patient.gender.is_empty(),
            GENDER_PENALTY,
            "Patient gender missing.",
        ),
        (
            document.transport.destination.is_empty(),
            DESTINATION_PENALTY,
            "Transport destination missing.",
        ),
        (document.unit.is_empty(), UNIT_PENALTY, "Unit number missing."),
    ];

    let mut score = MAX_SCORE;
    let mut suggestions = Vec::new();

    for (missing, penalty, suggestion) in checks {
        if missing {
            score = score.saturating_sub(penalty);
            suggestions.push(suggestion.to_string());
        }
    }

    let feedback = if score == MAX_SCORE {
        "All required fields completed."
    } else {
        "Some administrative fields are missing."
    };

    CategoryScore {
        category: CATEGORY.to_string(),
        score,
        max_score: MAX_SCORE,
        feedback: feedback.to_string(),
        suggestions,
    }
}
