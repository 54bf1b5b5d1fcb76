//! Shared state and wire types for the API layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::models::{MedicalSummary, VitalSigns};
use crate::pipeline::narrative::NarrativeSummarizer;

use super::error::ApiError;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<AppConfig>,
    pub narrative: Option<Arc<dyn NarrativeSummarizer>>,
}

impl ApiContext {
    pub fn new(config: AppConfig, narrative: Option<Arc<dyn NarrativeSummarizer>>) -> Self {
        Self {
            config: Arc::new(config),
            narrative,
        }
    }
}

/// Body of `POST /api/summarize` and `POST /api/narrative`.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub medical_report: String,
}

impl ReportRequest {
    /// The trimmed report, rejecting blank input.
    pub fn into_report(self) -> Result<String, ApiError> {
        let report = self.medical_report.trim();
        if report.is_empty() {
            return Err(ApiError::EmptyReport);
        }
        Ok(report.to_string())
    }
}

/// Identity fields exposed to clients. `dob` is not part of the wire format.
#[derive(Debug, Serialize)]
pub struct PatientPayload {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub mrn: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryPayload {
    pub patient_info: PatientPayload,
    pub chief_complaint: String,
    pub diagnoses: Vec<String>,
    pub medications: Vec<String>,
    pub vital_signs: VitalSigns,
    pub lab_results: Vec<String>,
    pub critical_flags: Vec<String>,
    pub formatted_summary: String,
}

impl SummaryPayload {
    pub fn new(summary: MedicalSummary, formatted_summary: String) -> Self {
        let patient = summary.patient_info;
        Self {
            patient_info: PatientPayload {
                name: patient.name,
                age: patient.age,
                gender: patient.gender,
                mrn: patient.mrn,
            },
            chief_complaint: summary.chief_complaint,
            diagnoses: summary.diagnoses,
            medications: summary.medications,
            vital_signs: summary.vital_signs,
            lab_results: summary.lab_results,
            critical_flags: summary.critical_flags,
            formatted_summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: SummaryPayload,
}

#[derive(Debug, Serialize)]
pub struct NarrativeResponse {
    pub success: bool,
    pub narrative: String,
}
