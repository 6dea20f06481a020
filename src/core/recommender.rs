use crate::core::{
    penalty::{conflict_penalty, NicheCounter},
    ranker::{diversify, rank, RankedEntry},
    rationale::generate_rationale,
    scoring::{compute_breakdown, compute_final_score},
    stats::{compute_global_stats, GlobalStats},
};
use crate::models::{
    Creator, RecommendationMetadata, RecommendationRequest, RecommendationResponse,
    ScoredCreator, ScoringWeights, SCORING_VERSION,
};
use crate::services::{CampaignRepository, CreatorRepository, PastDealRepository};

/// Scoring and ranking orchestrator
///
/// # Pipeline Stages
/// 1. Corpus-wide performance bounds
/// 2. Per-creator fit breakdown and conflict penalty
/// 3. Ranking, with an optional niche diversity pass
/// 4. Top-k selection
///
/// Holds no per-request state, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank the whole creator corpus against a request
    ///
    /// # Arguments
    /// * `request` - Campaign brief to match against
    /// * `creators` - Creator corpus, every creator is scored
    /// * `campaigns` - Campaign registry for past-deal tag lookups
    /// * `past_deals` - Deal history indexed by creator
    pub fn recommend<C, K, D>(
        &self,
        request: &RecommendationRequest,
        creators: &C,
        campaigns: &K,
        past_deals: &D,
    ) -> RecommendationResponse
    where
        C: CreatorRepository + ?Sized,
        K: CampaignRepository + ?Sized,
        D: PastDealRepository + ?Sized,
    {
        let corpus = creators.list();
        let top_k = request.top_k();
        let stats = compute_global_stats(corpus);

        tracing::debug!(
            "Scoring {} creators (top_k: {}, diversity: {})",
            corpus.len(),
            top_k,
            request.diversity()
        );

        let mut entries: Vec<RankedEntry> = corpus
            .iter()
            .map(|creator| RankedEntry {
                primary_tag: creator.primary_tag().to_string(),
                result: self.score_creator(creator, request, &stats, campaigns, past_deals),
            })
            .collect();

        rank(&mut entries);

        if request.diversity() {
            diversify(&mut entries, &mut NicheCounter::new());
        }

        entries.truncate(top_k);

        RecommendationResponse {
            recommendations: entries.into_iter().map(|entry| entry.result).collect(),
            metadata: RecommendationMetadata {
                total_creators: corpus.len(),
                scoring_version: SCORING_VERSION.to_string(),
            },
        }
    }

    /// Breakdown, conflict-penalized score and rationale for one creator
    pub fn score_creator<K, D>(
        &self,
        creator: &Creator,
        request: &RecommendationRequest,
        stats: &GlobalStats,
        campaigns: &K,
        past_deals: &D,
    ) -> ScoredCreator
    where
        K: CampaignRepository + ?Sized,
        D: PastDealRepository + ?Sized,
    {
        let breakdown = compute_breakdown(creator, request, stats);
        let penalty = conflict_penalty(
            past_deals.by_creator(&creator.id),
            &request.tags_required,
            campaigns,
        );

        ScoredCreator {
            creator_id: creator.id.clone(),
            score: compute_final_score(&breakdown, &self.weights, penalty),
            fit_breakdown: breakdown,
            why: generate_rationale(&breakdown),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
