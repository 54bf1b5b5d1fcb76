//! Turns a section's raw text into cleaned list items.
//!
//! Diagnosis cleaning runs the full heuristic chain (split, strip markers,
//! length floor, exclusion/inclusion filter, status truncation, cap).
//! Medication cleaning adds a dosage scan ahead of the line split and skips
//! the exclusion/inclusion filter.

use std::sync::LazyLock;

use regex::Regex;

use super::matcher::{compile, MatchMode};
use super::sections::{extract_section, SectionKind};
use super::vocabulary::{
    CONDITION_INDICATOR_SUFFIXES, CONDITION_INDICATOR_TERMS, DIAGNOSIS_EXCLUSION_TERMS,
    STATUS_CLAUSE_QUALIFIERS, STATUS_CLAUSE_WORDS,
};

/// Items shorter than this (in characters, after marker stripping) are noise.
pub const MIN_ITEM_CHARS: usize = 5;
pub const MAX_DIAGNOSES: usize = 10;
pub const MAX_MEDICATIONS: usize = 15;

const BULLETS: &[char] = &['-', '•', '*', '–', '·'];

/// Leading "1.", "2)", "(3)", "1.x" or bare "1 " numbering.
static NUMBER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\(?\d{1,3}(?:[.)][ \t]*|[ \t]+)", MatchMode::Line));

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[-•*–·]+\s*", MatchMode::Line));

/// Name tokens on one line immediately followed by a dose in mg, mcg or g.
static DOSAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b([A-Za-z][A-Za-z-]*(?:[ \t]+[A-Za-z][A-Za-z-]*)*)[ \t]+\d+(?:\.\d+)?[ \t]*(?:mg|mcg|g)\b",
        MatchMode::Line,
    )
});

/// Spaced hyphen, dash, colon or parenthesis, optional qualifiers, then a
/// status word. An unspaced hyphen belongs to the name ("non-stable").
static STATUS_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?:\s+-|\s*[–—:(])\s*(?:(?:{qualifiers})\s+)*(?:{words})\b",
        qualifiers = STATUS_CLAUSE_QUALIFIERS.join("|"),
        words = STATUS_CLAUSE_WORDS
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|"),
    );
    compile(&pattern, MatchMode::Line)
});

/// Split a section into candidate items.
///
/// A new item starts at the first non-blank line and at every line that
/// begins with a digit or a bullet. Other lines continue the current item.
pub fn split_list_items(section: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for line in section.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match items.last_mut() {
            Some(current) if !starts_list_item(line) => {
                current.push(' ');
                current.push_str(line);
            }
            _ => items.push(line.to_string()),
        }
    }
    items
}

fn starts_list_item(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit() || BULLETS.contains(&c))
}

/// Remove leading numbering or bullet markup.
///
/// Numbering is only stripped when a letter (or nothing) follows it, so a
/// leading decimal such as "2.5 mg" stays intact.
pub fn strip_list_marker(item: &str) -> String {
    let item = item.trim();
    if let Some(m) = NUMBER_MARKER.find(item) {
        let rest = &item[m.end()..];
        if rest.is_empty() || rest.starts_with(char::is_alphabetic) {
            return rest.trim().to_string();
        }
        return item.to_string();
    }
    BULLET_MARKER.replace(item, "").trim().to_string()
}

fn long_enough(item: &str) -> bool {
    item.chars().count() >= MIN_ITEM_CHARS
}

/// True when the lowercased candidate names a medical condition.
fn has_condition_indicator(lower: &str) -> bool {
    if CONDITION_INDICATOR_TERMS.iter().any(|t| lower.contains(t)) {
        return true;
    }
    lower
        .split(|c: char| !c.is_alphabetic())
        .any(|word| {
            CONDITION_INDICATOR_SUFFIXES
                .iter()
                .any(|s| word.len() > s.len() + 1 && word.ends_with(s))
        })
}

/// Drop management/status phrases unless they also name a condition.
pub fn is_diagnosis_candidate(item: &str) -> bool {
    let lower = item.to_lowercase();
    let excluded = DIAGNOSIS_EXCLUSION_TERMS.iter().any(|t| lower.contains(t));
    !excluded || has_condition_indicator(&lower)
}

/// Keep only the diagnosis name in front of a trailing status annotation.
pub fn truncate_status_clause(item: &str) -> String {
    match STATUS_CLAUSE.find(item) {
        Some(m) => item[..m.start()].trim().to_string(),
        None => item.trim().to_string(),
    }
}

/// Clean a diagnosis section into at most [`MAX_DIAGNOSES`] items.
pub fn clean_diagnoses(section: &str) -> Vec<String> {
    split_list_items(section)
        .iter()
        .map(|item| strip_list_marker(item))
        .filter(|item| long_enough(item))
        .filter(|item| is_diagnosis_candidate(item))
        .map(|item| truncate_status_clause(&item))
        .filter(|item| !item.is_empty())
        .take(MAX_DIAGNOSES)
        .collect()
}

/// Names found in front of a dose ("Aspirin" in "Aspirin 81mg daily").
pub fn scan_dosage_names(section: &str) -> Vec<String> {
    DOSAGE
        .captures_iter(section)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Clean a medication section into at most [`MAX_MEDICATIONS`] items.
///
/// Dosage-scan names come first, then every non-empty line whose dosage
/// name was not already listed. Both go through marker stripping and the
/// length floor.
pub fn clean_medications(section: &str) -> Vec<String> {
    let mut candidates = scan_dosage_names(section);
    let dosed = candidates.clone();
    candidates.extend(
        section
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .filter(|l| !scan_dosage_names(l).iter().any(|name| dosed.contains(name)))
            .map(String::from),
    );

    candidates
        .iter()
        .map(|item| strip_list_marker(item))
        .filter(|item| long_enough(item))
        .take(MAX_MEDICATIONS)
        .collect()
}

/// Diagnoses from the first matching diagnosis/assessment section.
pub fn extract_diagnoses(text: &str) -> Vec<String> {
    extract_section(SectionKind::Diagnosis, text)
        .map(|section| clean_diagnoses(&section))
        .unwrap_or_default()
}

/// Medications from the first matching medication section.
pub fn extract_medications(text: &str) -> Vec<String> {
    extract_section(SectionKind::Medications, text)
        .map(|section| clean_medications(&section))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_numbered_and_bulleted_lines() {
        let items = split_list_items("1. Asthma\n2. Eczema\n- Rhinitis\n• Otitis media");
        assert_eq!(items, vec!["1. Asthma", "2. Eczema", "- Rhinitis", "• Otitis media"]);
    }

    #[test]
    fn continuation_lines_join_previous_item() {
        let items = split_list_items("1. Community acquired\n   pneumonia\n2. Sepsis");
        assert_eq!(items, vec!["1. Community acquired pneumonia", "2. Sepsis"]);
    }

    #[test]
    fn strips_markers() {
        assert_eq!(strip_list_marker("1. Asthma"), "Asthma");
        assert_eq!(strip_list_marker("12) Gout"), "Gout");
        assert_eq!(strip_list_marker("(3) Gout"), "Gout");
        assert_eq!(strip_list_marker("- Gout"), "Gout");
        assert_eq!(strip_list_marker("• Gout"), "Gout");
        assert_eq!(strip_list_marker("Gout"), "Gout");
    }

    #[test]
    fn keeps_decimal_numbers_at_item_start() {
        assert_eq!(strip_list_marker("2.5 mg daily"), "2.5 mg daily");
        assert_eq!(strip_list_marker("12.5 mg daily"), "12.5 mg daily");
        assert_eq!(strip_list_marker("100mg tablet"), "100mg tablet");
    }

    #[test]
    fn strips_bare_and_unspaced_numbering() {
        assert_eq!(strip_list_marker("3 Dyslipidemia"), "Dyslipidemia");
        assert_eq!(strip_list_marker("1.Asthma"), "Asthma");
        assert_eq!(strip_list_marker("2)Gout"), "Gout");
        assert_eq!(strip_list_marker("1."), "");
    }

    #[test]
    fn bare_numbered_diagnoses_are_cleaned() {
        let cleaned = clean_diagnoses("1 Asthma exacerbation\n2 Dyslipidemia");
        assert_eq!(cleaned, vec!["Asthma exacerbation", "Dyslipidemia"]);
    }

    #[test]
    fn diagnosis_with_indicator_kept_management_phrase_dropped() {
        let cleaned = clean_diagnoses("1. Acute coronary syndrome\n2. Medication adjustment");
        assert_eq!(cleaned, vec!["Acute coronary syndrome"]);
    }

    #[test]
    fn exclusion_with_indicator_survives_and_is_truncated() {
        let cleaned = clean_diagnoses("1. Hypertension \u{2014} well controlled\n2. Follow-up in clinic");
        assert_eq!(cleaned, vec!["Hypertension"]);
    }

    #[test]
    fn truncates_status_clause_with_qualifier() {
        assert_eq!(
            truncate_status_clause("Hypertension - poorly controlled"),
            "Hypertension"
        );
        assert_eq!(truncate_status_clause("Type 2 diabetes: stable"), "Type 2 diabetes");
        assert_eq!(truncate_status_clause("Asthma (well controlled)"), "Asthma");
        assert_eq!(truncate_status_clause("Non-stable angina"), "Non-stable angina");
        assert_eq!(
            truncate_status_clause("Acute coronary syndrome - Rule out myocardial infarction"),
            "Acute coronary syndrome - Rule out myocardial infarction"
        );
    }

    #[test]
    fn suffix_indicator_rescues_excluded_item() {
        assert!(is_diagnosis_candidate("Bronchitis - improving"));
        assert!(!is_diagnosis_candidate("Continue current regimen"));
        assert!(is_diagnosis_candidate("Dyslipidemia"));
    }

    #[test]
    fn short_items_dropped() {
        let cleaned = clean_diagnoses("1. UTI\n2. Gastroenteritis");
        assert_eq!(cleaned, vec!["Gastroenteritis"]);
    }

    #[test]
    fn diagnoses_capped_at_ten() {
        let section: String = (1..=14).map(|i| format!("{i}. Chronic condition {i}\n")).collect();
        let cleaned = clean_diagnoses(&section);
        assert_eq!(cleaned.len(), MAX_DIAGNOSES);
        assert_eq!(cleaned[0], "Chronic condition 1");
    }

    #[test]
    fn dosage_scan_takes_name_portion() {
        let names = scan_dosage_names("1. Aspirin 81mg daily\n2. Metoprolol 50 mg twice daily");
        assert_eq!(names, vec!["Aspirin", "Metoprolol"]);
    }

    #[test]
    fn dosage_scan_does_not_cross_lines() {
        let names = scan_dosage_names("Metoprolol 50mg twice daily\nAtorvastatin 40mg daily");
        assert_eq!(names, vec!["Metoprolol", "Atorvastatin"]);
    }

    #[test]
    fn dosage_scan_units() {
        let names = scan_dosage_names("Levothyroxine 75mcg\nCeftriaxone 1g IV\nNotes 5 given");
        assert_eq!(names, vec!["Levothyroxine", "Ceftriaxone"]);
    }

    #[test]
    fn medications_list_dosage_names_then_lines() {
        let meds = clean_medications(
            "1. Aspirin 81mg daily\n2. Insulin sliding scale\n3. Metoprolol 50mg twice daily",
        );
        assert_eq!(meds, vec!["Aspirin", "Metoprolol", "Insulin sliding scale"]);
    }

    #[test]
    fn dosed_lines_are_not_repeated() {
        let meds = clean_medications("1. Aspirin 81mg daily\n2. Metoprolol 50mg twice daily");
        assert_eq!(meds, vec!["Aspirin", "Metoprolol"]);
    }

    #[test]
    fn medication_lines_skip_diagnosis_heuristic() {
        let meds = clean_medications("Insulin sliding scale adjustment");
        assert_eq!(meds, vec!["Insulin sliding scale adjustment"]);
    }

    #[test]
    fn medications_capped_at_fifteen() {
        let section: String = (1..=20).map(|i| format!("- Drugname{i} {i}0mg daily\n")).collect();
        let meds = clean_medications(&section);
        assert_eq!(meds.len(), MAX_MEDICATIONS);
    }

    #[test]
    fn extract_from_full_report() {
        let text = "Diagnosis:\n1. Acute coronary syndrome\n2. Medication adjustment\n\nMedications:\n1. Aspirin 81mg daily\n";
        assert_eq!(extract_diagnoses(text), vec!["Acute coronary syndrome"]);
        assert_eq!(extract_medications(text), vec!["Aspirin"]);
    }

    #[test]
    fn missing_sections_yield_empty_lists() {
        assert!(extract_diagnoses("no sections here").is_empty());
        assert!(extract_medications("no sections here").is_empty());
    }
}
