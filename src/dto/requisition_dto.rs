use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::requisition::{RequisitionPriority, RequisitionReason};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRequisitionPayload {
    #[validate(length(min = 1))]
    pub title: String,
    pub department_id: i64,
    pub region_id: i64,
    pub recruiter_id: i64,
    pub priority: RequisitionPriority,
    pub reason: RequisitionReason,
    #[serde(default)]
    pub description: String,
}

/// Partial update; absent fields keep their current value. Status and both
/// timestamps are deliberately not editable here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRequisitionPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub department_id: Option<i64>,
    pub region_id: Option<i64>,
    pub recruiter_id: Option<i64>,
    pub priority: Option<RequisitionPriority>,
    pub reason: Option<RequisitionReason>,
    pub description: Option<String>,
}
