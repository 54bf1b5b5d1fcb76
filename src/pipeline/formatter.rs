//! Plain-text rendering of a [`MedicalSummary`] for display.

use chrono::NaiveDateTime;

use crate::models::MedicalSummary;

const RULE_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 30;
/// Only the first medications are rendered; the JSON summary keeps them all.
pub const MAX_DISPLAYED_MEDICATIONS: usize = 10;
const FLAG_MARKER: &str = "\u{26a0}\u{fe0f}";

/// Render the summary as labeled sections.
///
/// Sections with nothing to show are omitted, except the patient block
/// which always has its heading. `generated_at` is printed in the footer.
pub fn format_summary(summary: &MedicalSummary, generated_at: NaiveDateTime) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push("=".repeat(RULE_WIDTH));
    out.push("\u{1f4cb} MEDICAL REPORT SUMMARY".to_string());
    out.push("=".repeat(RULE_WIDTH));

    section_heading(&mut out, "\u{1f464} PATIENT INFORMATION");
    let patient = &summary.patient_info;
    for (label, value) in [
        ("Name", &patient.name),
        ("Age", &patient.age),
        ("Gender", &patient.gender),
        ("MRN", &patient.mrn),
    ] {
        if !value.is_empty() {
            out.push(format!("{label}: {value}"));
        }
    }

    if !summary.critical_flags.is_empty() {
        section_heading(&mut out, "\u{1f6a8} CRITICAL FLAGS");
        out.extend(
            summary
                .critical_flags
                .iter()
                .map(|flag| format!("{FLAG_MARKER} {flag}")),
        );
    }

    if !summary.chief_complaint.is_empty() {
        section_heading(&mut out, "\u{1f4ac} CHIEF COMPLAINT");
        out.push(summary.chief_complaint.clone());
    }

    if !summary.diagnoses.is_empty() {
        section_heading(&mut out, "\u{1fa7a} DIAGNOSES");
        push_numbered(&mut out, summary.diagnoses.iter());
    }

    if !summary.vital_signs.is_empty() {
        section_heading(&mut out, "\u{1f4ca} VITAL SIGNS");
        out.extend(
            summary
                .vital_signs
                .iter()
                .map(|(label, value)| format!("{label}: {value}")),
        );
    }

    if !summary.medications.is_empty() {
        section_heading(&mut out, "\u{1f48a} MEDICATIONS");
        push_numbered(
            &mut out,
            summary.medications.iter().take(MAX_DISPLAYED_MEDICATIONS),
        );
    }

    if !summary.lab_results.is_empty() {
        section_heading(&mut out, "\u{1f9ea} LABORATORY RESULTS");
        out.extend(summary.lab_results.iter().map(|lab| format!("\u{2022} {lab}")));
    }

    out.push(format!("\n{}", "=".repeat(RULE_WIDTH)));
    out.push(format!(
        "Generated on: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    out.join("\n")
}

fn section_heading(out: &mut Vec<String>, title: &str) {
    out.push(format!("\n{title}"));
    out.push("-".repeat(SECTION_RULE_WIDTH));
}

fn push_numbered<'a>(out: &mut Vec<String>, items: impl Iterator<Item = &'a String>) {
    out.extend(
        items
            .enumerate()
            .map(|(i, item)| format!("{}. {item}", i + 1)),
    );
}
