use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{dto::analysis_dto::AnalyzeFitPayload, error::Result, AppState};

/// Runs the structured fit analysis. Failures here are display-level only
/// and never touch ledger state; retrying is just calling again.
#[axum::debug_handler]
pub async fn analyze_fit(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeFitPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let analysis = state
        .analysis_service
        .analyze_fit(&payload.resume, &payload.job_description)
        .await?;
    Ok(Json(analysis))
}

/// Raw relay to the generative endpoint: POST only (the router answers 405
/// elsewhere), fails closed without a configured credential, forwards the
/// body verbatim and hands back the upstream status and body unmodified.
#[axum::debug_handler]
pub async fn relay_generate(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse> {
    let (status, text) = state.analysis_service.relay(body).await?;
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        text,
    ))
}
