use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequisitionStatus {
    Open,
    Closed,
    /// Reserved. No operation currently produces this status.
    OnHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequisitionPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequisitionReason {
    NewHeadcount,
    Replacement,
    Temporary,
}

/// A job opening. `closed_at` is set exactly when the status toggles
/// Open -> Closed and cleared on reopen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requisition {
    pub id: i64,
    pub title: String,
    pub department_id: i64,
    pub region_id: i64,
    pub recruiter_id: i64,
    pub priority: RequisitionPriority,
    pub reason: RequisitionReason,
    pub status: RequisitionStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Requisition {
    pub fn is_open(&self) -> bool {
        self.status == RequisitionStatus::Open
    }
}
