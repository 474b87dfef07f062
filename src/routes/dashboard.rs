use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use chrono::Utc;

use crate::{
    analytics,
    dto::dashboard_dto::{DashboardStats, SlaRow},
    error::Result,
    models::requisition::RequisitionStatus,
    AppState,
};

/// Recomputes every metric from one consistent snapshot; nothing is cached
/// or incrementally maintained.
#[axum::debug_handler]
pub async fn get_dashboard_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let snapshot = state.ledger.snapshot().await;
    let now = Utc::now();

    let funnel = analytics::active_candidate_funnel(&snapshot.requisitions, &snapshot.candidates);
    let active_funnel = analytics::without_terminal_stages(&funnel);
    let candidates_per_requisition =
        analytics::candidates_per_requisition(&snapshot.requisitions, &snapshot.candidates);

    let sla: Vec<SlaRow> = snapshot
        .requisitions
        .iter()
        .filter(|r| r.is_open())
        .map(|r| {
            let days_open = analytics::days_since(Some(r.created_at), now);
            SlaRow {
                requisition_id: r.id,
                title: r.title.clone(),
                recruiter: snapshot
                    .recruiters
                    .iter()
                    .find(|rec| rec.id == r.recruiter_id)
                    .map(|rec| rec.name.clone()),
                candidates: candidates_per_requisition.get(&r.id).copied().unwrap_or(0),
                days_open,
                status: analytics::sla_status(days_open),
            }
        })
        .collect();

    let stats = DashboardStats {
        open_requisitions: snapshot.requisitions.iter().filter(|r| r.is_open()).count(),
        opened_last_week: analytics::requisitions_count_by_period(
            &snapshot.requisitions,
            7,
            RequisitionStatus::Open,
            now,
        ),
        opened_last_month: analytics::requisitions_count_by_period(
            &snapshot.requisitions,
            30,
            RequisitionStatus::Open,
            now,
        ),
        closed_last_week: analytics::requisitions_count_by_period(
            &snapshot.requisitions,
            7,
            RequisitionStatus::Closed,
            now,
        ),
        closed_last_month: analytics::requisitions_count_by_period(
            &snapshot.requisitions,
            30,
            RequisitionStatus::Closed,
            now,
        ),
        average_time_to_hire_days: analytics::average_time_to_hire(&snapshot.requisitions),
        funnel,
        active_funnel,
        open_by_recruiter: analytics::open_requisitions_by_recruiter(
            &snapshot.requisitions,
            &snapshot.recruiters,
        ),
        source_distribution: analytics::candidate_source_distribution(
            &snapshot.candidates,
            &snapshot.sources,
        ),
        candidates_per_requisition,
        sla,
    };

    Ok(Json(stats))
}
