use crate::models::{VitalSigns, VitalType};

use super::vocabulary::CRITICAL_TERMS;

/// Systolic pressure above this is abnormal.
pub const SYSTOLIC_HIGH: u32 = 140;
/// Systolic pressure below this is abnormal.
pub const SYSTOLIC_LOW: u32 = 90;

pub const ABNORMAL_BP_FLAG: &str = "Abnormal Blood Pressure";

/// Vocabulary flags in vocabulary order, then the blood pressure flag.
///
/// Each vocabulary term yields at most one flag no matter how often it
/// occurs. A blood pressure value that cannot be read is skipped; it never
/// suppresses the vocabulary flags.
pub fn identify_critical_flags(text: &str, vitals: &VitalSigns) -> Vec<String> {
    let mut flags = scan_critical_terms(text);
    if let Some(flag) = blood_pressure_flag(vitals) {
        flags.push(flag.to_string());
    }
    flags
}

/// `"<Term> Mentioned"` for every critical term found, case-insensitively.
pub fn scan_critical_terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    CRITICAL_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .map(|term| format!("{} Mentioned", title_case(term)))
        .collect()
}

/// Threshold check on the extracted systolic value, if any.
pub fn blood_pressure_flag(vitals: &VitalSigns) -> Option<&'static str> {
    let bp = vitals.get(VitalType::BloodPressure)?;
    let Some(systolic) = parse_systolic(bp) else {
        tracing::warn!("Unreadable blood pressure value, threshold check skipped");
        return None;
    };
    (systolic > SYSTOLIC_HIGH || systolic < SYSTOLIC_LOW).then_some(ABNORMAL_BP_FLAG)
}

/// Systolic component of an `"S/D"` reading.
///
/// An all-digit value too large for `u32` saturates to `u32::MAX`; only
/// empty or non-numeric values are unreadable.
pub fn parse_systolic(bp: &str) -> Option<u32> {
    let (systolic, _) = bp.split_once('/')?;
    let systolic = systolic.trim();
    if systolic.is_empty() || !systolic.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(systolic.parse().unwrap_or(u32::MAX))
}

fn title_case(term: &str) -> String {
    term.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
