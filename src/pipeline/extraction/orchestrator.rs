use super::critical::identify_critical_flags;
use super::labs::extract_lab_results;
use super::list_items::{extract_diagnoses, extract_medications};
use super::patient::extract_patient_info;
use super::sanitize::sanitize_report_text;
use super::sections::extract_chief_complaint;
use super::vitals::extract_vital_signs;
use crate::models::MedicalSummary;

/// Build a structured summary from a free-text report.
///
/// Never fails: fields that cannot be found stay empty. Critical flags are
/// computed last because the blood pressure check reads the extracted vitals.
pub fn summarize_report(text: &str) -> MedicalSummary {
    let text = sanitize_report_text(text);

    let mut summary = MedicalSummary {
        patient_info: extract_patient_info(&text),
        chief_complaint: extract_chief_complaint(&text),
        diagnoses: extract_diagnoses(&text),
        medications: extract_medications(&text),
        vital_signs: extract_vital_signs(&text),
        lab_results: extract_lab_results(&text),
        ..MedicalSummary::default()
    };
    summary.critical_flags = identify_critical_flags(&text, &summary.vital_signs);

    tracing::debug!(
        diagnoses = summary.diagnoses.len(),
        medications = summary.medications.len(),
        vitals = summary.vital_signs.len(),
        labs = summary.lab_results.len(),
        flags = summary.critical_flags.len(),
        "Report summarized"
    );

    summary
}
