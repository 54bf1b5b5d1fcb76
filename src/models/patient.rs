use serde::{Deserialize, Serialize};

/// Identity fields found in a report. Empty string means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub mrn: String,
    /// Reserved; no rule extracts it.
    pub dob: String,
}

impl PatientInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.age.is_empty()
            && self.gender.is_empty()
            && self.mrn.is_empty()
            && self.dob.is_empty()
    }
}
