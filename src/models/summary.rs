use serde::{Deserialize, Serialize};

use super::patient::PatientInfo;
use super::vital_sign::VitalSigns;

/// Structured record assembled from one medical report.
///
/// Built once per document and handed out read-only. `procedures`,
/// `allergies` and `recommendations` have no extraction rule and stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalSummary {
    pub patient_info: PatientInfo,
    pub chief_complaint: String,
    pub diagnoses: Vec<String>,
    pub medications: Vec<String>,
    pub vital_signs: VitalSigns,
    pub procedures: Vec<String>,
    pub allergies: Vec<String>,
    pub lab_results: Vec<String>,
    pub recommendations: Vec<String>,
    pub critical_flags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_every_list_empty() {
        let summary = MedicalSummary::default();
        assert!(summary.patient_info.is_empty());
        assert!(summary.chief_complaint.is_empty());
        assert!(summary.diagnoses.is_empty());
        assert!(summary.medications.is_empty());
        assert!(summary.vital_signs.is_empty());
        assert!(summary.procedures.is_empty());
        assert!(summary.allergies.is_empty());
        assert!(summary.lab_results.is_empty());
        assert!(summary.recommendations.is_empty());
        assert!(summary.critical_flags.is_empty());
    }

    #[test]
    fn serializes_empty_lists_not_nulls() {
        let json = serde_json::to_value(MedicalSummary::default()).unwrap();
        assert_eq!(json["procedures"], serde_json::json!([]));
        assert_eq!(json["vital_signs"], serde_json::json!({}));
        assert_eq!(json["patient_info"]["dob"], "");
    }
}
