//! Creator Match - explainable creator recommendations for campaign briefs
//!
//! This library provides the scoring and ranking engine that matches
//! advertising creators to a campaign brief, plus the thin HTTP layer and
//! in-memory datasets the service runs on.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, NicheCounter, GlobalStats};
pub use models::{Creator, Campaign, PastDeal, FitBreakdown, ScoredCreator, RecommendationRequest, RecommendationResponse};
pub use services::{Catalog, CreatorRepository, CampaignRepository, PastDealRepository};
