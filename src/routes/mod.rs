pub mod analysis;
pub mod candidate_routes;
pub mod dashboard;
pub mod health;
pub mod reference;
pub mod requisition;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::AppState;

/// The full API surface. Layers (CORS, tracing) are applied by the binary.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/requisitions",
            get(requisition::list_requisitions).post(requisition::create_requisition),
        )
        .route(
            "/api/requisitions/:id",
            get(requisition::get_requisition)
                .patch(requisition::update_requisition)
                .delete(requisition::delete_requisition),
        )
        .route(
            "/api/requisitions/:id/status",
            post(requisition::toggle_requisition_status),
        )
        .route(
            "/api/requisitions/:id/candidates",
            get(requisition::list_requisition_candidates),
        )
        .route(
            "/api/candidates",
            get(candidate_routes::list_candidates).post(candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(candidate_routes::get_candidate)
                .patch(candidate_routes::update_candidate)
                .delete(candidate_routes::delete_candidate),
        )
        .route(
            "/api/candidates/:id/applications",
            get(candidate_routes::list_applications).post(candidate_routes::assign_to_requisition),
        )
        .route(
            "/api/candidates/:id/applications/:requisition_id/stage",
            post(candidate_routes::advance_stage),
        )
        .route(
            "/api/settings/:kind",
            get(reference::list_references).post(reference::create_reference),
        )
        .route(
            "/api/settings/:kind/:id",
            patch(reference::update_reference).delete(reference::delete_reference),
        )
        .route("/api/dashboard/stats", get(dashboard::get_dashboard_stats))
        .route("/api/analysis/fit", post(analysis::analyze_fit))
        .route("/api/ai/generate", post(analysis::relay_generate))
        .with_state(state)
}
