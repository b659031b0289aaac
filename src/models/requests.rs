use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to calculate a life path number
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LifePathRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "birth_date", rename = "birthDate")]
    pub birth_date: String,
}

/// Request to check the compatibility of two birth dates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "birth_date1", rename = "birthDate1")]
    pub birth_date1: String,
    #[validate(length(min = 1))]
    #[serde(alias = "birth_date2", rename = "birthDate2")]
    pub birth_date2: String,
}
