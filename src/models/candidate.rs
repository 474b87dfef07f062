use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::stage::PipelineStage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageEntry {
    pub stage: PipelineStage,
    pub date: DateTime<Utc>,
}

/// One candidate's engagement with one requisition. `history` is an
/// append-only stage log and is never empty once the application exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub requisition_id: i64,
    pub history: Vec<StageEntry>,
}

impl Application {
    pub fn new(requisition_id: i64, at: DateTime<Utc>) -> Self {
        Self {
            requisition_id,
            history: vec![StageEntry {
                stage: PipelineStage::Applied,
                date: at,
            }],
        }
    }

    /// The displayed stage is a projection of the log's last entry; it is
    /// never stored separately.
    pub fn current_stage(&self) -> PipelineStage {
        self.history
            .last()
            .map(|entry| entry.stage)
            .unwrap_or(PipelineStage::Applied)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub location: String,
    pub avatar_url: String,
    pub source_id: i64,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub resume: String,
    pub applications: Vec<Application>,
}
