use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Bumped whenever the weight table or a scoring formula changes
pub const SCORING_VERSION: &str = "1.0";

/// Primary tag bucket for creators without any tags
pub const UNKNOWN_NICHE: &str = "unknown";

/// Inclusive age range served by a creator or targeted by a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_age_range"))]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }
}

fn validate_age_range(range: &AgeRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("age_range_inverted"));
    }
    Ok(())
}

/// Audience a campaign wants to reach
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AudienceTarget {
    #[serde(default)]
    pub country: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub age_range: Vec<AgeRange>,
}

/// Creator profile with audience and performance data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub audience_age: Vec<AgeRange>,
    #[serde(default)]
    pub audience_location: Vec<String>,
    pub avg_views: u64,
    pub ctr: f64,
    pub cvr: f64,
    pub price_min: i64,
    pub price_max: i64,
    pub reliability_score: f64,
}

impl Creator {
    /// First listed tag, used only for diversity bucketing
    pub fn primary_tag(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or(UNKNOWN_NICHE)
    }
}

/// Campaign brief registered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub brand: String,
    pub goal: String,
    #[serde(default)]
    pub tags_required: Vec<String>,
    #[serde(default)]
    pub audience_target: AudienceTarget,
    pub budget_cents: i64,
    pub deadline: chrono::NaiveDate,
}

/// Historical deal between a creator and a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastDeal {
    pub id: String,
    pub creator_id: String,
    pub campaign_id: String,
    pub delivered_on_time: bool,
    pub performance_score: f64,
}

/// Per-dimension fit scores, each rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub tags: f64,
    pub audience_overlap: f64,
    pub performance: f64,
    pub budget_fit: f64,
    pub reliability: f64,
}

/// Ranked recommendation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCreator {
    pub creator_id: String,
    pub score: f64,
    pub fit_breakdown: FitBreakdown,
    pub why: String,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub tags: f64,
    pub audience_overlap: f64,
    pub performance: f64,
    pub budget_fit: f64,
    pub reliability: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.tags + self.audience_overlap + self.performance + self.budget_fit + self.reliability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tags: 0.30,
            audience_overlap: 0.25,
            performance: 0.20,
            budget_fit: 0.15,
            reliability: 0.10,
        }
    }
}
