use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_REQUIREMENT_WEIGHT: u32 = 10;

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Assessment,
    Treatment,
    Documentation,
    Communication,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredElement {
    #[serde(deserialize_with = "null_as_default")]
    pub category: ElementCategory,
    #[serde(deserialize_with = "null_as_default")]
    pub element: String,
    pub weight: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
}

impl RequiredElement {
    /// Penalty applied when the element is missing. Zero counts as unspecified.
    pub fn effective_weight(&self) -> u32 {
        self.weight
            .filter(|weight| *weight > 0)
            .unwrap_or(DEFAULT_REQUIREMENT_WEIGHT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientPresentation {
    #[serde(deserialize_with = "null_as_default")]
    pub chief_complaint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub history_of_present_illness: String,
    #[serde(deserialize_with = "null_as_default")]
    pub physical_findings: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriteria {
    pub max_points: u32,
    pub passing_score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient_presentation: PatientPresentation,
    #[serde(deserialize_with = "null_as_default")]
    pub required_elements: Vec<RequiredElement>,
    pub scoring_criteria: Option<ScoringCriteria>,
}

impl Scenario {
    pub fn required_treatments(&self) -> impl Iterator<Item = &RequiredElement> {
        self.required_elements
            .iter()
            .filter(|e| e.category == ElementCategory::Treatment && e.required)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    pub age: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allergies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub medications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub medical_history: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub chief_complaint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncidentDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub incident_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mechanism: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodPressure {
    #[serde(deserialize_with = "null_as_default")]
    pub systolic: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub diastolic: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlasgowComaScale {
    #[serde(deserialize_with = "null_as_default")]
    pub eye: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub verbal: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub motor: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}

/// One snapshot of vital signs. Any field may be absent; a zero reading is
/// treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VitalSigns {
    pub timestamp: Option<DateTime<Utc>>,
    pub blood_pressure: Option<BloodPressure>,
    pub heart_rate: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub temperature: Option<f64>,
    pub blood_glucose: Option<f64>,
    pub pain_scale: Option<f64>,
    pub glasgow_coma_scale: Option<GlasgowComaScale>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryAssessment {
    #[serde(deserialize_with = "null_as_default")]
    pub consciousness: String,
    #[serde(deserialize_with = "null_as_default")]
    pub airway: String,
    #[serde(deserialize_with = "null_as_default")]
    pub breathing: String,
    #[serde(deserialize_with = "null_as_default")]
    pub circulation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mental_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClinicalAssessment {
    #[serde(deserialize_with = "null_as_default")]
    pub primary_assessment: PrimaryAssessment,
    /// Chronological recording order.
    #[serde(deserialize_with = "null_as_default")]
    pub vital_signs: Vec<VitalSigns>,
    #[serde(deserialize_with = "null_as_default")]
    pub impressions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub protocols: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicationAdministration {
    #[serde(deserialize_with = "null_as_default")]
    pub medication: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dose: String,
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
    pub time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub indication: String,
    #[serde(deserialize_with = "null_as_default")]
    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcedurePerformed {
    #[serde(deserialize_with = "null_as_default")]
    pub procedure: String,
    pub time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub successful: bool,
    pub complications: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreatmentDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub medications: Vec<MedicationAdministration>,
    #[serde(deserialize_with = "null_as_default")]
    pub procedures: Vec<ProcedurePerformed>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transport_mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub condition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub continued_care: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrativeSection {
    #[serde(deserialize_with = "null_as_default")]
    pub subjective: String,
    #[serde(deserialize_with = "null_as_default")]
    pub objective: String,
    #[serde(deserialize_with = "null_as_default")]
    pub assessment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub plan: String,
    pub additional_notes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
}

impl NarrativeSection {
    /// The four SOAP fields joined with single spaces.
    pub fn soap_text(&self) -> String {
        [
            self.subjective.as_str(),
            self.objective.as_str(),
            self.assessment.as_str(),
            self.plan.as_str(),
        ]
        .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PcrDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scenario_id: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub call_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub patient: PatientInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub incident: IncidentDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub assessment: ClinicalAssessment,
    #[serde(deserialize_with = "null_as_default")]
    pub treatment: TreatmentDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub transport: TransportDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub narrative: NarrativeSection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_front_end_shape_with_missing_fields() {
        let json = r#"{
            "id": "pcr-1",
            "unit": "Medic 7",
            "patient": { "age": 62, "gender": "male" },
            "assessment": {
                "vitalSigns": [
                    { "bloodPressure": { "systolic": 156, "diastolic": 94 }, "heartRate": 102 }
                ]
            },
            "narrative": { "subjective": "Crushing chest pain" }
        }"#;

        let document: PcrDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.unit, "Medic 7");
        assert_eq!(document.patient.age, Some(62.0));
        assert_eq!(document.assessment.vital_signs.len(), 1);
        assert_eq!(document.assessment.vital_signs[0].heart_rate, Some(102.0));
        assert!(document.narrative.plan.is_empty());
        assert!(document.transport.destination.is_empty());
    }

    #[test]
    fn explicit_nulls_read_as_defaults() {
        let json = r#"{
            "id": "pcr-2",
            "unit": null,
            "patient": { "allergies": null, "age": null },
            "incident": null,
            "assessment": { "vitalSigns": null, "impressions": null },
            "treatment": { "medications": null },
            "narrative": { "subjective": "Fell from ladder", "plan": null }
        }"#;

        let document: PcrDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.id, "pcr-2");
        assert!(document.unit.is_empty());
        assert!(document.patient.allergies.is_empty());
        assert_eq!(document.patient.age, None);
        assert_eq!(document.incident, IncidentDetails::default());
        assert!(document.assessment.vital_signs.is_empty());
        assert!(document.treatment.medications.is_empty());
        assert_eq!(document.narrative.subjective, "Fell from ladder");
        assert!(document.narrative.plan.is_empty());
    }

    #[test]
    fn fractional_readings_are_accepted() {
        let json = r#"{
            "patient": { "age": 0.5 },
            "assessment": {
                "vitalSigns": [
                    {
                        "bloodPressure": { "systolic": 118.0, "diastolic": null },
                        "heartRate": 98.0,
                        "oxygenSaturation": 97.5,
                        "glasgowComaScale": { "total": 15.0 }
                    }
                ]
            }
        }"#;

        let document: PcrDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.patient.age, Some(0.5));
        let first = &document.assessment.vital_signs[0];
        assert_eq!(first.heart_rate, Some(98.0));
        assert_eq!(first.oxygen_saturation, Some(97.5));
        assert_eq!(
            first.blood_pressure,
            Some(BloodPressure {
                systolic: 118.0,
                diastolic: 0.0,
            })
        );
        assert_eq!(first.glasgow_coma_scale.map(|gcs| gcs.total), Some(15.0));
    }

    #[test]
    fn null_scenario_fields_read_as_defaults() {
        let json = r#"{
            "id": "stroke",
            "patientPresentation": { "chiefComplaint": null },
            "requiredElements": [
                { "category": null, "element": "Stroke scale", "weight": null, "required": true }
            ]
        }"#;

        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert!(scenario.patient_presentation.chief_complaint.is_empty());
        assert_eq!(scenario.required_elements[0].category, ElementCategory::Other);
        assert_eq!(scenario.required_elements[0].effective_weight(), 10);
    }

    #[test]
    fn unknown_element_category_falls_back_to_other() {
        let json = r#"{ "category": "logistics", "element": "Stage equipment", "required": true }"#;
        let element: RequiredElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.category, ElementCategory::Other);
        assert_eq!(element.effective_weight(), DEFAULT_REQUIREMENT_WEIGHT);
    }

    #[test]
    fn zero_weight_uses_default() {
        let element = RequiredElement {
            category: ElementCategory::Treatment,
            element: "Aspirin".to_string(),
            weight: Some(0),
            required: true,
        };
        assert_eq!(element.effective_weight(), 10);

        let weighted = RequiredElement {
            weight: Some(15),
            ..element
        };
        assert_eq!(weighted.effective_weight(), 15);
    }

    #[test]
    fn soap_text_joins_four_fields() {
        let narrative = NarrativeSection {
            subjective: "a".to_string(),
            objective: "b".to_string(),
            assessment: "c".to_string(),
            plan: "d".to_string(),
            additional_notes: Some("ignored".to_string()),
            format: "soap".to_string(),
        };
        assert_eq!(narrative.soap_text(), "a b c d");
    }
}
