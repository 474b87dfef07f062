use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveReferencePayload {
    #[validate(length(min = 1))]
    pub name: String,
}
