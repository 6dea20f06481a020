use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCreator;

/// Response for the recommendations endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<ScoredCreator>,
    pub metadata: RecommendationMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub total_creators: usize,
    pub scoring_version: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub creators: usize,
    pub campaigns: usize,
    pub past_deals: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
