use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        AdvanceStagePayload, AssignApplicationPayload, CreateCandidatePayload,
        UpdateCandidatePayload,
    },
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.ledger.list_candidates().await))
}

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.ledger.create_candidate(payload).await;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let candidate = state.ledger.get_candidate(id).await?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.ledger.update_candidate(id, payload).await?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.ledger.delete_candidate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let candidate = state.ledger.get_candidate(id).await?;
    Ok(Json(candidate.applications))
}

/// Links the candidate to a requisition with a fresh Applied entry. Repeating
/// the call for the same requisition is a no-op and still returns 200.
#[axum::debug_handler]
pub async fn assign_to_requisition(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignApplicationPayload>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .ledger
        .assign_candidate(id, payload.requisition_id)
        .await?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn advance_stage(
    State(state): State<AppState>,
    Path((id, requisition_id)): Path<(i64, i64)>,
    Json(payload): Json<AdvanceStagePayload>,
) -> Result<impl IntoResponse> {
    let application = state
        .ledger
        .advance_stage(id, requisition_id, payload.stage)
        .await?;
    Ok(Json(application))
}
