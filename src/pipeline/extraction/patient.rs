use std::sync::LazyLock;

use super::matcher::{FieldMatcher, MatchMode};
use crate::models::PatientInfo;

/// Name runs until a newline, the next identity heading, or the end of text.
static NAME: LazyLock<FieldMatcher> = LazyLock::new(|| {
    FieldMatcher::new(
        &[
            r"\bPatient(?:\s+Name)?[:\s]+([A-Za-z\s,]+?)\s*(?:\n|\bAge\b|\bDOB\b|\bMRN\b|\z)",
            r"\bName[:\s]+([A-Za-z\s,]+?)\s*(?:\n|\bAge\b|\bDOB\b|\bMRN\b|\z)",
        ],
        MatchMode::Line,
    )
});

static AGE: LazyLock<FieldMatcher> =
    LazyLock::new(|| FieldMatcher::new(&[r"\bAge[:\s]+(\d+)"], MatchMode::Line));

static GENDER: LazyLock<FieldMatcher> = LazyLock::new(|| {
    FieldMatcher::new(&[r"\b(?:Gender|Sex)[:\s]+(Male|Female|M|F)\b"], MatchMode::Line)
});

static MRN: LazyLock<FieldMatcher> =
    LazyLock::new(|| FieldMatcher::new(&[r"\bMRN[:\s#]+([A-Z0-9]+)"], MatchMode::Line));

/// Pull identity fields. Each field is independent; any subset may be empty.
/// Values are not checked for plausibility.
pub fn extract_patient_info(text: &str) -> PatientInfo {
    PatientInfo {
        name: NAME.first_match(text).unwrap_or_default(),
        age: AGE.first_match(text).unwrap_or_default(),
        gender: GENDER.first_match(text).unwrap_or_default(),
        mrn: MRN.first_match(text).unwrap_or_default(),
        dob: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_identity_fields() {
        let text = "Patient: John Smith\nAge: 45\nGender: Male\nMRN: MR123456\n";
        let info = extract_patient_info(text);
        assert_eq!(info.name, "John Smith");
        assert_eq!(info.age, "45");
        assert_eq!(info.gender, "Male");
        assert_eq!(info.mrn, "MR123456");
        assert_eq!(info.dob, "");
    }

    #[test]
    fn indented_report_lines() {
        let text = "\n    Patient: John Smith\n    Age: 45\n    Gender: Male\n    MRN: MR123456\n";
        let info = extract_patient_info(text);
        assert_eq!(info.name, "John Smith");
        assert_eq!(info.mrn, "MR123456");
    }

    #[test]
    fn name_heading_alternative() {
        let info = extract_patient_info("Name: Doe, Jane\nDOB: 01/02/1980");
        assert_eq!(info.name, "Doe, Jane");
    }

    #[test]
    fn name_stops_at_inline_heading() {
        let info = extract_patient_info("Patient: Jane Roe Age: 61");
        assert_eq!(info.name, "Jane Roe");
        assert_eq!(info.age, "61");
    }

    #[test]
    fn name_containing_heading_letters_is_kept() {
        let info = extract_patient_info("Patient: Paige Turner\n");
        assert_eq!(info.name, "Paige Turner");
    }

    #[test]
    fn sex_heading_and_short_gender() {
        let info = extract_patient_info("Sex: F\n");
        assert_eq!(info.gender, "F");
        let info = extract_patient_info("Gender: female");
        assert_eq!(info.gender, "female");
    }

    #[test]
    fn missing_fields_are_empty() {
        let info = extract_patient_info("Chief Complaint: cough");
        assert!(info.is_empty());
    }

    #[test]
    fn age_is_not_range_checked() {
        let info = extract_patient_info("Age: 999");
        assert_eq!(info.age, "999");
    }
}
