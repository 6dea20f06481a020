use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::AudienceTarget;

pub const DEFAULT_TOP_K: usize = 10;
pub const MAX_TOP_K: usize = 100;

/// Request for a ranked creator shortlist
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    pub goal: String,
    #[serde(default)]
    pub tags_required: Vec<String>,
    #[validate(nested)]
    pub audience_target: AudienceTarget,
    #[validate(range(min = 0))]
    pub budget_cents: i64,
    pub deadline: chrono::NaiveDate,
    #[validate(range(min = 1, max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversity: Option<bool>,
}

impl RecommendationRequest {
    /// Number of results to return, clamped to [1, 100]
    pub fn top_k(&self) -> usize {
        self.top_k
            .map(|k| (k as usize).clamp(1, MAX_TOP_K))
            .unwrap_or(DEFAULT_TOP_K)
    }

    pub fn diversity(&self) -> bool {
        self.diversity.unwrap_or(false)
    }
}

/// Optional filters for the creator listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatorQuery {
    pub tag: Option<String>,
    pub country: Option<String>,
}
