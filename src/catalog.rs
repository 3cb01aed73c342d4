use std::sync::LazyLock;

use crate::models::{
    ElementCategory, PatientPresentation, RequiredElement, Scenario, ScoringCriteria,
};

pub const DEFAULT_PASSING_SCORE: u32 = 80;

static SCENARIOS: LazyLock<Vec<Scenario>> = LazyLock::new(|| {
    vec![
        scenario(
            "chest-pain",
            "Chest Pain - 62M",
            "62-year-old male complaining of crushing chest pain while mowing the lawn.",
            "cardiac",
            "Patient states \"I have crushing chest pain\"",
            vec![
                element(ElementCategory::Assessment, "12-lead ECG", 10, true),
                element(ElementCategory::Treatment, "Aspirin administration", 10, true),
                element(ElementCategory::Treatment, "Nitroglycerin administration", 10, true),
                element(ElementCategory::Documentation, "Pain score before/after", 5, true),
            ],
        ),
        scenario(
            "fall",
            "Fall - 78F",
            "78-year-old female fell at home, complaining of hip pain.",
            "trauma",
            "Patient states \"I fell and hurt my hip\"",
            vec![
                element(ElementCategory::Assessment, "Hip assessment", 10, true),
                element(ElementCategory::Assessment, "CMS check", 10, true),
                element(ElementCategory::Treatment, "Immobilization", 10, true),
            ],
        ),
        scenario(
            "respiratory",
            "Respiratory Distress - 45M",
            "45-year-old male with severe shortness of breath.",
            "respiratory",
            "Patient states \"I can't breathe\"",
            vec![
                element(ElementCategory::Assessment, "Lung sounds", 10, true),
                element(ElementCategory::Treatment, "Oxygen administration", 10, true),
                element(ElementCategory::Treatment, "Nebulizer treatment", 10, true),
            ],
        ),
        scenario(
            "diabetic",
            "Hypoglycemia - 35F",
            "35-year-old female with altered mental status and a history of diabetes.",
            "medical",
            "Bystander states \"She seems confused and is acting strange\"",
            vec![
                element(ElementCategory::Assessment, "Blood glucose check", 10, true),
                element(ElementCategory::Treatment, "Dextrose administration", 10, true),
                element(ElementCategory::Assessment, "Reassessment of mental status", 10, true),
            ],
        ),
        scenario(
            "pediatric-seizure",
            "Pediatric Seizure - 4M",
            "4-year-old male actively seizing with a fever.",
            "pediatric",
            "Mother states \"He won't stop shaking!\"",
            vec![
                element(ElementCategory::Assessment, "Airway assessment", 10, true),
                element(ElementCategory::Assessment, "Temperature check", 5, true),
                element(ElementCategory::Treatment, "Midazolam administration", 15, true),
                element(ElementCategory::Treatment, "Oxygen administration", 10, true),
                element(ElementCategory::Treatment, "Cooling measures", 5, false),
            ],
        ),
        scenario(
            "trauma-mva",
            "Multi-System Trauma - MVA",
            "Unrestrained driver in a high-speed collision with multiple injuries.",
            "trauma",
            "Patient is moaning, unable to speak clearly.",
            vec![
                element(ElementCategory::Assessment, "Rapid trauma assessment", 10, true),
                element(ElementCategory::Treatment, "Spinal immobilization", 10, true),
                element(ElementCategory::Treatment, "Needle decompression", 15, true),
                element(ElementCategory::Treatment, "Fluid resuscitation", 10, true),
                element(ElementCategory::Treatment, "Transport to Trauma Center", 10, true),
            ],
        ),
    ]
});

/// Base training cases shipped with the scorer.
pub fn builtin_scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

fn scenario(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    chief_complaint: &str,
    required_elements: Vec<RequiredElement>,
) -> Scenario {
    Scenario {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        patient_presentation: PatientPresentation {
            chief_complaint: chief_complaint.to_string(),
            ..Default::default()
        },
        required_elements,
        scoring_criteria: Some(ScoringCriteria {
            max_points: 100,
            passing_score: DEFAULT_PASSING_SCORE,
        }),
    }
}

fn element(category: ElementCategory, name: &str, weight: u32, required: bool) -> RequiredElement {
    RequiredElement {
        category,
        element: name.to_string(),
        weight: Some(weight),
        required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = builtin_scenarios().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), builtin_scenarios().len());
    }

    #[test]
    fn finds_by_id() {
        let scenario = find("chest-pain").unwrap();
        assert_eq!(scenario.title, "Chest Pain - 62M");
        assert_eq!(scenario.required_treatments().count(), 2);
        assert!(find("unknown").is_none());
    }

    #[test]
    fn optional_treatments_are_not_required() {
        let scenario = find("pediatric-seizure").unwrap();
        let required: Vec<_> = scenario
            .required_treatments()
            .map(|e| e.element.as_str())
            .collect();
        assert_eq!(required, vec!["Midazolam administration", "Oxygen administration"]);
    }
}
