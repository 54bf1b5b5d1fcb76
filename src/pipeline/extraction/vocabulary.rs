//! Heuristic vocabularies used by the extractors.
//!
//! Kept as plain tables so they can be reviewed, tested and extended
//! without touching the matching logic. All terms are lowercase; matching
//! is done against lowercased text.

/// Terms whose presence anywhere in a report raises a critical flag.
/// Order is the order flags are emitted in.
pub const CRITICAL_TERMS: &[&str] = &[
    "critical",
    "urgent",
    "emergency",
    "acute",
    "severe",
    "chest pain",
    "shortness of breath",
    "stroke",
    "heart attack",
    "allergic reaction",
    "sepsis",
    "pneumonia",
];

/// Management and status vocabulary. A diagnosis candidate containing one
/// of these is dropped unless it also carries a condition indicator.
pub const DIAGNOSIS_EXCLUSION_TERMS: &[&str] = &[
    "stable",
    "follow-up",
    "follow up",
    "followup",
    "adjustment",
    "management",
    "monitoring",
    "continue",
    "titrate",
    "titration",
    "counseling",
    "education",
    "referral",
    "discharge",
    "controlled",
    "improved",
    "improving",
    "resolved",
    "schedule",
    "return to clinic",
];

/// Substrings that mark a candidate as naming a medical condition.
pub const CONDITION_INDICATOR_TERMS: &[&str] = &[
    "syndrome",
    "disease",
    "disorder",
    "acute",
    "chronic",
    "failure",
    "infection",
    "insufficiency",
    "deficiency",
    "injury",
    "fracture",
    "infarction",
    "fibrillation",
    "embolism",
    "thrombosis",
    "hypertension",
    "hypotension",
    "diabetes",
    "pneumonia",
    "sepsis",
    "stroke",
    "asthma",
    "copd",
    "cancer",
    "carcinoma",
    "tumor",
    "obesity",
    "dyslipidemia",
    "hyperlipidemia",
    "arrhythmia",
    "angina",
];

/// Word endings that mark a condition name ("bronchitis", "anemia", ...).
pub const CONDITION_INDICATOR_SUFFIXES: &[&str] = &["itis", "emia", "osis", "pathy", "oma", "algia"];

/// Words that, after a dash or colon, start a status annotation rather than
/// part of the diagnosis name.
pub const STATUS_CLAUSE_WORDS: &[&str] = &[
    "stable",
    "controlled",
    "uncontrolled",
    "improved",
    "improving",
    "management",
    "adjustment",
    "resolved",
    "monitoring",
];

/// Qualifiers allowed between the separator and the status word
/// ("- well controlled", "- remains stable").
pub const STATUS_CLAUSE_QUALIFIERS: &[&str] = &[
    "well",
    "poorly",
    "partially",
    "fairly",
    "now",
    "currently",
    "clinically",
    "remains",
    "is",
    "under",
    "needs",
    "requires",
];

/// Shape of a lab value capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabValueKind {
    Integer,
    Decimal,
}

impl LabValueKind {
    pub fn pattern(self) -> &'static str {
        match self {
            LabValueKind::Integer => r"\d+",
            LabValueKind::Decimal => r"\d+\.?\d*",
        }
    }
}

/// A cataloged analyte and the spellings it is reported under.
#[derive(Debug, Clone, Copy)]
pub struct LabAnalyte {
    pub aliases: &'static [&'static str],
    pub value: LabValueKind,
}

/// Analytes scanned for by the lab extractor, in output order.
pub const LAB_CATALOG: &[LabAnalyte] = &[
    LabAnalyte { aliases: &["Hemoglobin", "Hgb"], value: LabValueKind::Decimal },
    LabAnalyte { aliases: &["WBC", "White Blood Cell"], value: LabValueKind::Decimal },
    LabAnalyte { aliases: &["Glucose"], value: LabValueKind::Integer },
    LabAnalyte { aliases: &["Creatinine"], value: LabValueKind::Decimal },
    LabAnalyte { aliases: &["BUN"], value: LabValueKind::Integer },
    LabAnalyte { aliases: &["Cholesterol"], value: LabValueKind::Integer },
    LabAnalyte { aliases: &["Sodium"], value: LabValueKind::Integer },
    LabAnalyte { aliases: &["Potassium"], value: LabValueKind::Decimal },
    LabAnalyte { aliases: &["Platelets", "PLT"], value: LabValueKind::Integer },
];
