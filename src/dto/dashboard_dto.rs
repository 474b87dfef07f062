use std::collections::BTreeMap;

use serde::Serialize;

use crate::analytics::SlaStatus;
use crate::models::stage::PipelineStage;

/// One row of the SLA table, derived per Open requisition on every read.
#[derive(Debug, Clone, Serialize)]
pub struct SlaRow {
    pub requisition_id: i64,
    pub title: String,
    /// None when the recruiter reference dangles; consumers render "N/A".
    pub recruiter: Option<String>,
    pub candidates: usize,
    pub days_open: i64,
    pub status: SlaStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub open_requisitions: usize,
    pub opened_last_week: usize,
    pub opened_last_month: usize,
    pub closed_last_week: usize,
    pub closed_last_month: usize,
    /// None means "no data" (no closed requisitions), not zero.
    pub average_time_to_hire_days: Option<i64>,
    /// Every stage bucket, terminal ones included.
    pub funnel: BTreeMap<PipelineStage, usize>,
    /// The funnel with Hired/Rejected dropped, as charted.
    pub active_funnel: BTreeMap<PipelineStage, usize>,
    /// Sparse: recruiters without open requisitions are absent.
    pub open_by_recruiter: BTreeMap<String, usize>,
    pub source_distribution: BTreeMap<String, usize>,
    /// Zero-filled: every requisition id is present.
    pub candidates_per_requisition: BTreeMap<i64, usize>,
    pub sla: Vec<SlaRow>,
}
