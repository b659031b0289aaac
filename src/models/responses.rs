use serde::{Deserialize, Serialize};
use crate::models::domain::{
    BirthDate, CompatibilityReport, CompatibilityScore, CompatibilityTier, LifePathNumber,
    LifePathReading, NumberMeaning,
};

/// Response for the life path endpoint
pub type LifePathResponse = LifePathReading;

/// One side of a compatibility check
#[derive(Debug, Clone, Serialize)]
pub struct PartnerSummary {
    #[serde(rename = "birthDate")]
    pub birth_date: BirthDate,
    #[serde(rename = "lifePathNumber")]
    pub life_path_number: LifePathNumber,
}

impl From<&LifePathReading> for PartnerSummary {
    fn from(reading: &LifePathReading) -> Self {
        Self {
            birth_date: reading.birth_date,
            life_path_number: reading.number,
        }
    }
}

/// Response for the compatibility endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityResponse {
    pub first: PartnerSummary,
    pub second: PartnerSummary,
    pub score: CompatibilityScore,
    pub tier: CompatibilityTier,
    pub label: &'static str,
}

impl From<CompatibilityReport> for CompatibilityResponse {
    fn from(report: CompatibilityReport) -> Self {
        Self {
            first: PartnerSummary::from(&report.first),
            second: PartnerSummary::from(&report.second),
            score: report.score,
            tier: report.tier,
            label: report.tier.label(),
        }
    }
}

/// A meaning entry together with its number
#[derive(Debug, Clone, Serialize)]
pub struct MeaningEntry {
    pub number: LifePathNumber,
    #[serde(flatten)]
    pub meaning: &'static NumberMeaning,
}

/// Response listing every defined meaning
#[derive(Debug, Clone, Serialize)]
pub struct MeaningsResponse {
    pub meanings: Vec<MeaningEntry>,
}

/// Response for a single meaning lookup
#[derive(Debug, Clone, Serialize)]
pub struct MeaningResponse {
    pub number: LifePathNumber,
    #[serde(rename = "isMaster")]
    pub is_master: bool,
    pub meaning: Option<&'static NumberMeaning>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
        }
    }
}
