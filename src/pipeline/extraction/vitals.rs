use std::sync::LazyLock;

use super::matcher::{FieldMatcher, MatchMode};
use crate::models::{VitalSigns, VitalType};

impl VitalType {
    /// Heading alternatives and value capture for this vital.
    fn patterns(self) -> &'static [&'static str] {
        match self {
            VitalType::BloodPressure => &[r"\b(?:BP|Blood\s+Pressure)[:\s]+(\d+/\d+)"],
            VitalType::HeartRate => &[r"\b(?:HR|Heart\s+Rate|Pulse)[:\s]+(\d+)"],
            VitalType::Temperature => &[r"\bTemp(?:erature)?[:\s]+(\d+\.?\d*)"],
            VitalType::RespiratoryRate => &[r"\b(?:RR|Resp(?:iratory)?\s+Rate)[:\s]+(\d+)"],
            VitalType::OxygenSaturation => {
                &[r"\b(?:O2\s*Sat(?:uration)?|SpO2|Oxygen\s+Saturation)[:\s]+(\d+%)"]
            }
        }
    }
}

/// One matcher per vital, in extraction order.
static VITAL_CATALOG: LazyLock<Vec<(VitalType, FieldMatcher)>> = LazyLock::new(|| {
    VitalType::ALL
        .into_iter()
        .map(|vital| (vital, FieldMatcher::new(vital.patterns(), MatchMode::Line)))
        .collect()
});

/// First reported value of each vital anywhere in the document, with its
/// unit suffix. Vitals that are not reported are left out of the map.
pub fn extract_vital_signs(text: &str) -> VitalSigns {
    let mut vitals = VitalSigns::new();
    for (vital, matcher) in VITAL_CATALOG.iter() {
        if let Some(value) = matcher.first_match(text) {
            vitals.insert(*vital, format!("{value}{}", vital.unit_suffix()));
        }
    }
    vitals
}
