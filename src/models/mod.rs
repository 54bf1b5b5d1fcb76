pub mod patient;
pub mod summary;
pub mod vital_sign;

pub use patient::PatientInfo;
pub use summary::MedicalSummary;
pub use vital_sign::{VitalSigns, VitalType};
