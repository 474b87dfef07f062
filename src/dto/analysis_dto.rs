use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeFitPayload {
    #[validate(length(min = 1))]
    pub resume: String,
    /// May arrive empty; the analysis service rejects it before any network
    /// activity rather than at validation time.
    #[serde(default)]
    pub job_description: String,
}
