//! Rule-based extraction of clinical facts from free-text reports.

pub mod critical;
pub mod labs;
pub mod list_items;
pub mod matcher;
pub mod orchestrator;
pub mod patient;
pub mod sanitize;
pub mod sections;
pub mod vitals;
pub mod vocabulary;

pub use critical::identify_critical_flags;
pub use labs::extract_lab_results;
pub use list_items::{extract_diagnoses, extract_medications};
pub use matcher::{FieldMatcher, MatchMode};
pub use orchestrator::summarize_report;
pub use patient::extract_patient_info;
pub use sanitize::sanitize_report_text;
pub use sections::{extract_chief_complaint, extract_section, SectionKind};
pub use vitals::extract_vital_signs;
