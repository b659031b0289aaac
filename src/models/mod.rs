// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BirthDate, CompatibilityReport, CompatibilityScore, CompatibilityTier, DateError,
    InvalidLifePathNumber, LifePathNumber, LifePathReading, NumberMeaning, MASTER_NUMBERS,
};
pub use requests::{CompatibilityRequest, LifePathRequest};
pub use responses::{
    CompatibilityResponse, ErrorResponse, HealthResponse, LifePathResponse, MeaningEntry,
    MeaningResponse, MeaningsResponse, PartnerSummary,
};
