pub mod analysis_dto;
pub mod candidate_dto;
pub mod dashboard_dto;
pub mod reference_dto;
pub mod requisition_dto;
