/// Clinical vocabulary counted toward the terminology sub-score.
pub const MEDICAL_TERMS: &[&str] = &[
    "normocephalic",
    "atraumatic",
    "tachycardia",
    "bradycardia",
    "hypertension",
    "hypotension",
    "tachypnea",
    "bradypnea",
    "hypoxia",
    "cyanosis",
    "diaphoretic",
    "auscultation",
    "palpation",
    "crepitus",
    "edema",
    "erythema",
    "laceration",
    "abrasion",
    "contusion",
    "hemorrhage",
    "epistaxis",
    "rhinorrhea",
    "otorrhea",
    "pupils",
    "perrl",
    "distension",
    "guarding",
    "rebound",
    "tenderness",
    "deformity",
    "angulation",
    "crepitation",
    "pulse",
    "motor",
    "sensory",
    "gcs",
    "alert",
    "oriented",
    "unresponsive",
    "syncope",
    "seizure",
    "postictal",
];

/// Text lowercased once so it can be searched for many needles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldedText(String);

impl FoldedText {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// Substring match against the lowercased needle. No word boundaries, so
    /// "pulse" also matches inside "pulseless".
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(&needle.to_lowercase())
    }
}

pub fn count_medical_terms(text: &str) -> usize {
    let folded = FoldedText::new(text);
    MEDICAL_TERMS
        .iter()
        .filter(|term| folded.contains(term))
        .count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
