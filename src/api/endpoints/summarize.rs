//! Structured summary endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ReportRequest, SummaryPayload, SummaryResponse};
use crate::pipeline::extraction::summarize_report;
use crate::pipeline::formatter::format_summary;

/// `POST /api/summarize`: extract a structured summary from a report.
pub async fn summarize(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload?;
    let report = request.into_report()?;

    tracing::info!(report_chars = report.chars().count(), "Summarizing report");

    let summary = tokio::task::spawn_blocking(move || {
        let summary = summarize_report(&report);
        let formatted = format_summary(&summary, chrono::Local::now().naive_local());
        SummaryPayload::new(summary, formatted)
    })
    .await?;

    Ok(Json(SummaryResponse {
        success: true,
        summary,
    }))
}
