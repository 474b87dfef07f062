use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::{Education, Experience};
use crate::models::stage::PipelineStage;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: String,
    pub source_id: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub resume: String,
}

/// Partial update; the applications list is never touched through this
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub source_id: Option<i64>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignApplicationPayload {
    pub requisition_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceStagePayload {
    pub stage: PipelineStage,
}
