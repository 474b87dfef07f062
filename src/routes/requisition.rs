use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::requisition_dto::{CreateRequisitionPayload, UpdateRequisitionPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/requisitions",
    responses(
        (status = 200, description = "All requisitions, newest first", body = Json<Vec<Requisition>>)
    )
)]
#[axum::debug_handler]
pub async fn list_requisitions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.ledger.list_requisitions().await))
}

#[utoipa::path(
    post,
    path = "/api/requisitions",
    request_body = CreateRequisitionPayload,
    responses(
        (status = 201, description = "Requisition created successfully", body = Json<Requisition>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_requisition(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequisitionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let requisition = state.ledger.create_requisition(payload).await;
    Ok((StatusCode::CREATED, Json(requisition)))
}

#[utoipa::path(
    get,
    path = "/api/requisitions/{id}",
    params(
        ("id" = i64, Path, description = "Requisition ID")
    ),
    responses(
        (status = 200, description = "Requisition found", body = Json<Requisition>),
        (status = 404, description = "Requisition not found")
    )
)]
#[axum::debug_handler]
pub async fn get_requisition(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let requisition = state.ledger.get_requisition(id).await?;
    Ok(Json(requisition))
}

#[utoipa::path(
    patch,
    path = "/api/requisitions/{id}",
    params(
        ("id" = i64, Path, description = "Requisition ID")
    ),
    request_body = UpdateRequisitionPayload,
    responses(
        (status = 200, description = "Requisition updated successfully", body = Json<Requisition>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Requisition not found")
    )
)]
#[axum::debug_handler]
pub async fn update_requisition(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRequisitionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let requisition = state.ledger.update_requisition(id, payload).await?;
    Ok(Json(requisition))
}

#[utoipa::path(
    post,
    path = "/api/requisitions/{id}/status",
    params(
        ("id" = i64, Path, description = "Requisition ID")
    ),
    responses(
        (status = 200, description = "Status toggled between Open and Closed", body = Json<Requisition>),
        (status = 404, description = "Requisition not found")
    )
)]
#[axum::debug_handler]
pub async fn toggle_requisition_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let requisition = state.ledger.toggle_requisition_status(id).await?;
    Ok(Json(requisition))
}

#[utoipa::path(
    delete,
    path = "/api/requisitions/{id}",
    params(
        ("id" = i64, Path, description = "Requisition ID")
    ),
    responses(
        (status = 204, description = "Requisition deleted; applications referencing it are removed"),
        (status = 404, description = "Requisition not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_requisition(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.ledger.delete_requisition(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/requisitions/{id}/candidates",
    params(
        ("id" = i64, Path, description = "Requisition ID")
    ),
    responses(
        (status = 200, description = "Candidates holding an application for this requisition", body = Json<Vec<Candidate>>)
    )
)]
#[axum::debug_handler]
pub async fn list_requisition_candidates(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.ledger.candidates_for_requisition(id).await))
}
