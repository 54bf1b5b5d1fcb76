//! Locates free-text sections bounded by a heading and a terminator.
//!
//! Each section kind has heading alternatives in priority order. The first
//! alternative that matches anywhere in the document wins, even when a later
//! alternative would have captured more. A document mixing two heading
//! conventions loses the content under the lower-priority one; merging is
//! not attempted because there is no well-defined merge order.

use std::sync::LazyLock;

use super::matcher::{FieldMatcher, MatchMode};

/// Blank line, optionally holding spaces or tabs.
const BLANK_LINE: &str = r"\n[ \t]*\r?\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    ChiefComplaint,
    Diagnosis,
    Medications,
}

/// One heading alternative and the headings that end its section.
struct SectionRule {
    heading: &'static str,
    terminators: &'static str,
}

const CHIEF_COMPLAINT_RULES: &[SectionRule] = &[
    SectionRule { heading: r"Chief\s+Complaint", terminators: r"\bHistory\s+of\s+Present" },
    SectionRule { heading: r"Presenting\s+Problem", terminators: r"\bHistory\b" },
    SectionRule { heading: r"CC", terminators: r"\bHPI\b" },
];

const DIAGNOSIS_RULES: &[SectionRule] = &[
    SectionRule {
        heading: r"Diagnos[ie]s",
        terminators: r"\bPlan\b|\bMedications\b|\bTreatment\b",
    },
    SectionRule {
        heading: r"Impression",
        terminators: r"\bPlan\b|\bMedications\b|\bTreatment\b",
    },
    SectionRule {
        heading: r"Assessment(?:\s+and\s+Plan)?",
        terminators: r"\bPlan\b|\bMedications\b|\bTreatment\b",
    },
];

const MEDICATION_RULES: &[SectionRule] = &[
    SectionRule {
        heading: r"(?:Current\s+|Home\s+|Discharge\s+)?Medications?",
        terminators: r"\bAllergies\b|\bProcedures\b",
    },
    SectionRule { heading: r"Rx", terminators: r"\bAllergies\b|\bProcedures\b" },
];

impl SectionKind {
    fn rules(self) -> &'static [SectionRule] {
        match self {
            SectionKind::ChiefComplaint => CHIEF_COMPLAINT_RULES,
            SectionKind::Diagnosis => DIAGNOSIS_RULES,
            SectionKind::Medications => MEDICATION_RULES,
        }
    }

    fn matcher(self) -> &'static FieldMatcher {
        match self {
            SectionKind::ChiefComplaint => &CHIEF_COMPLAINT,
            SectionKind::Diagnosis => &DIAGNOSIS,
            SectionKind::Medications => &MEDICATIONS,
        }
    }
}

static CHIEF_COMPLAINT: LazyLock<FieldMatcher> =
    LazyLock::new(|| build_matcher(SectionKind::ChiefComplaint));
static DIAGNOSIS: LazyLock<FieldMatcher> = LazyLock::new(|| build_matcher(SectionKind::Diagnosis));
static MEDICATIONS: LazyLock<FieldMatcher> =
    LazyLock::new(|| build_matcher(SectionKind::Medications));

/// A heading must be followed by a colon or a line break, so prose such as
/// "medication adjustment" never opens a section.
fn section_pattern(rule: &SectionRule) -> String {
    format!(
        r"\b(?:{heading})[ \t]*(?::|\r?\n)\s*(.*?)(?:{BLANK_LINE}|{terminators}|\z)",
        heading = rule.heading,
        terminators = rule.terminators,
    )
}

fn build_matcher(kind: SectionKind) -> FieldMatcher {
    let patterns: Vec<String> = kind.rules().iter().map(section_pattern).collect();
    let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
    FieldMatcher::new(&refs, MatchMode::Span)
}

/// Raw trimmed text of a section, or `None` when no heading alternative matched.
pub fn extract_section(kind: SectionKind, text: &str) -> Option<String> {
    kind.matcher().first_match(text)
}

/// Chief complaint or presenting problem; empty when absent.
pub fn extract_chief_complaint(text: &str) -> String {
    extract_section(SectionKind::ChiefComplaint, text).unwrap_or_default()
}
