//! Free-text narrative endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, NarrativeResponse, ReportRequest};
use crate::pipeline::narrative::generate_narrative;

/// `POST /api/narrative`: short prose summary of a report.
///
/// Degrades to a fixed message when no summarizer is configured or the
/// summarizer fails; only malformed requests are errors.
pub async fn narrate(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<NarrativeResponse>, ApiError> {
    let Json(request) = payload?;
    let report = request.into_report()?;
    let summarizer = ctx.narrative.clone();

    let narrative =
        tokio::task::spawn_blocking(move || generate_narrative(summarizer.as_deref(), &report))
            .await?;

    Ok(Json(NarrativeResponse {
        success: true,
        narrative,
    }))
}
