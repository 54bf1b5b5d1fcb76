use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Vital sign reported in a medical report.
///
/// Variant order is the extraction order, which is also the order the
/// vitals appear in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VitalType {
    #[serde(rename = "Blood Pressure")]
    BloodPressure,
    #[serde(rename = "Heart Rate")]
    HeartRate,
    #[serde(rename = "Temperature")]
    Temperature,
    #[serde(rename = "Respiratory Rate")]
    RespiratoryRate,
    #[serde(rename = "Oxygen Saturation")]
    OxygenSaturation,
}

impl VitalType {
    pub const ALL: [VitalType; 5] = [
        VitalType::BloodPressure,
        VitalType::HeartRate,
        VitalType::Temperature,
        VitalType::RespiratoryRate,
        VitalType::OxygenSaturation,
    ];

    /// Display label, also used as the JSON key.
    pub fn label(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "Blood Pressure",
            VitalType::HeartRate => "Heart Rate",
            VitalType::Temperature => "Temperature",
            VitalType::RespiratoryRate => "Respiratory Rate",
            VitalType::OxygenSaturation => "Oxygen Saturation",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == s)
    }

    /// Suffix appended to the captured value.
    /// Oxygen saturation captures its own `%`.
    pub fn unit_suffix(self) -> &'static str {
        match self {
            VitalType::BloodPressure => "",
            VitalType::HeartRate => " bpm",
            VitalType::Temperature => "°F",
            VitalType::RespiratoryRate => " /min",
            VitalType::OxygenSaturation => "",
        }
    }
}

/// Vitals found in a report. A missing key means "not reported".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VitalSigns(BTreeMap<VitalType, String>);

impl VitalSigns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vital: VitalType, value: String) {
        self.0.insert(vital, value);
    }

    pub fn get(&self, vital: VitalType) -> Option<&str> {
        self.0.get(&vital).map(String::as_str)
    }

    /// Lookup by display label ("Blood Pressure", "Heart Rate", ...).
    pub fn get_by_label(&self, label: &str) -> Option<&str> {
        VitalType::from_label(label).and_then(|v| self.get(v))
    }

    pub fn contains(&self, vital: VitalType) -> bool {
        self.0.contains_key(&vital)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(label, value)` pairs in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (k.label(), v.as_str()))
    }
}
