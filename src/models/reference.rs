use serde::{Deserialize, Serialize};

/// Master-data entry shared by all four reference collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: i64,
    pub name: String,
}

/// Type tag selecting one of the four reference collections. The serde names
/// double as the URL path segments for the generic settings endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    #[serde(rename = "recruiters")]
    Recruiter,
    #[serde(rename = "regions")]
    Region,
    #[serde(rename = "departments")]
    Department,
    #[serde(rename = "sources")]
    Source,
}

impl ReferenceKind {
    pub fn label(self) -> &'static str {
        match self {
            ReferenceKind::Recruiter => "recruiter",
            ReferenceKind::Region => "region",
            ReferenceKind::Department => "department",
            ReferenceKind::Source => "source",
        }
    }
}
