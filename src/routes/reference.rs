use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::reference_dto::SaveReferencePayload, error::Result, models::reference::ReferenceKind,
    AppState,
};

// One generic CRUD surface for all four reference collections, dispatched by
// the `ReferenceKind` path segment (recruiters, regions, departments,
// sources).

#[axum::debug_handler]
pub async fn list_references(
    State(state): State<AppState>,
    Path(kind): Path<ReferenceKind>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.ledger.list_references(kind).await))
}

#[axum::debug_handler]
pub async fn create_reference(
    State(state): State<AppState>,
    Path(kind): Path<ReferenceKind>,
    Json(payload): Json<SaveReferencePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state.ledger.create_reference(kind, payload.name).await;
    Ok((StatusCode::CREATED, Json(item)))
}

#[axum::debug_handler]
pub async fn update_reference(
    State(state): State<AppState>,
    Path((kind, id)): Path<(ReferenceKind, i64)>,
    Json(payload): Json<SaveReferencePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state.ledger.update_reference(kind, id, payload.name).await?;
    Ok(Json(item))
}

#[axum::debug_handler]
pub async fn delete_reference(
    State(state): State<AppState>,
    Path((kind, id)): Path<(ReferenceKind, i64)>,
) -> Result<impl IntoResponse> {
    state.ledger.delete_reference(kind, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
