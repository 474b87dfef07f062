use serde::{Deserialize, Serialize};

/// Hiring funnel stages, declared in display order. Any stage may follow any
/// other in an application's history; `Rejected` is reachable from all of
/// them. Nothing here constrains transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 6] = [
        PipelineStage::Applied,
        PipelineStage::Screening,
        PipelineStage::Interview,
        PipelineStage::Offer,
        PipelineStage::Hired,
        PipelineStage::Rejected,
    ];

    /// Hired and Rejected end an application in the domain sense, even though
    /// the stage log itself accepts further entries after them.
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Hired | PipelineStage::Rejected)
    }
}
