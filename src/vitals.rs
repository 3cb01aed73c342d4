use crate::models::VitalSigns;
use crate::scores::CategoryScore;

pub const CATEGORY: &str = "Vitals Documentation";
pub const MAX_SCORE: u32 = 100;
pub const EXPECTED_FIELDS: u32 = 5;
pub const COMPLETENESS_POINTS: u32 = 50;
pub const TRENDING_POINTS: u32 = 50;

pub fn score(vitals: &[VitalSigns]) -> CategoryScore {
    let Some(first) = vitals.first() else {
        return CategoryScore {
            category: CATEGORY.to_string(),
            score: 0,
            max_score: MAX_SCORE,
            feedback: "No vital signs recorded.".to_string(),
            suggestions: vec!["You must record at least one set of vital signs.".to_string()],
        };
    };

    let mut suggestions = Vec::new();
    let fields_present = fields_present(first);
    let mut score = fields_present * COMPLETENESS_POINTS / EXPECTED_FIELDS;

    if vitals.len() > 1 {
        score += TRENDING_POINTS;
    } else {
        suggestions.push("Record a second set of vitals to show trending.".to_string());
    }

    if fields_present < EXPECTED_FIELDS {
        suggestions
            .push("Ensure all vital signs (BP, HR, RR, SpO2, GCS) are recorded.".to_string());
    }

    let feedback = if score == MAX_SCORE {
        "Excellent vitals documentation."
    } else {
        "Vitals documentation incomplete."
    };

    CategoryScore {
        category: CATEGORY.to_string(),
        score,
        max_score: MAX_SCORE,
        feedback: feedback.to_string(),
        suggestions,
    }
}

/// Count of systolic BP, HR, RR, SpO2 and GCS total readings that are present
/// and non-zero. NaN counts as missing.
pub fn fields_present(set: &VitalSigns) -> u32 {
    let readings = [
        set.blood_pressure.map(|bp| bp.systolic),
        set.heart_rate,
        set.respiratory_rate,
        set.oxygen_saturation,
        set.glasgow_coma_scale.map(|gcs| gcs.total),
    ];

    readings
        .iter()
        .filter(|reading| matches!(reading, Some(value) if value.abs() > 0.0))
        .count() as u32
}
