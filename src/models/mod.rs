// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, AudienceTarget, Campaign, Creator, FitBreakdown, PastDeal, ScoredCreator,
    ScoringWeights, SCORING_VERSION, UNKNOWN_NICHE,
};
pub use requests::{CreatorQuery, RecommendationRequest, DEFAULT_TOP_K, MAX_TOP_K};
pub use responses::{ErrorResponse, HealthResponse, RecommendationMetadata, RecommendationResponse};
