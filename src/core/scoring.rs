use std::collections::HashSet;

use crate::core::stats::GlobalStats;
use crate::models::{AgeRange, AudienceTarget, Creator, FitBreakdown, RecommendationRequest, ScoringWeights};

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Jaccard index of two tag sets, 0 when both are empty
pub fn tags_score(campaign_tags: &[String], creator_tags: &[String]) -> f64 {
    let campaign: HashSet<&str> = campaign_tags.iter().map(String::as_str).collect();
    let creator: HashSet<&str> = creator_tags.iter().map(String::as_str).collect();
    jaccard(&campaign, &creator)
}

/// Fraction of campaign countries the creator serves
pub fn country_score(campaign_countries: &[String], creator_locations: &[String]) -> f64 {
    if campaign_countries.is_empty() {
        return 0.0;
    }

    let served: HashSet<&str> = creator_locations.iter().map(String::as_str).collect();
    let matched = campaign_countries
        .iter()
        .filter(|country| served.contains(country.as_str()))
        .count();

    matched as f64 / campaign_countries.len() as f64
}

/// Jaccard index over the integer ages covered by each side's ranges
pub fn age_overlap_score(campaign_ranges: &[AgeRange], creator_ranges: &[AgeRange]) -> f64 {
    jaccard(&expand_ages(campaign_ranges), &expand_ages(creator_ranges))
}

/// Equal blend of country and age fit
pub fn audience_score(target: &AudienceTarget, creator: &Creator) -> f64 {
    let country = country_score(&target.country, &creator.audience_location);
    let age = age_overlap_score(&target.age_range, &creator.audience_age);
    0.5 * country + 0.5 * age
}

/// Min-max normalization, 0.5 for a degenerate range
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.5;
    }
    (value - min) / (max - min)
}

/// Mean of normalized views, CTR and CVR
pub fn performance_score(creator: &Creator, stats: &GlobalStats) -> f64 {
    let views = normalize(creator.avg_views as f64, stats.min_views, stats.max_views);
    let ctr = normalize(creator.ctr, stats.min_ctr, stats.max_ctr);
    let cvr = normalize(creator.cvr, stats.min_cvr, stats.max_cvr);
    (views + ctr + cvr) / 3.0
}

/// Budget compatibility of the creator's mid price.
///
/// At or under budget the score slides from 1.0 down to 0.7; over budget it
/// drops twice as fast and reaches 0 at 50% over.
pub fn budget_score(price_min: i64, price_max: i64, budget_cents: i64) -> f64 {
    if budget_cents <= 0 {
        return 0.0;
    }

    let mid = (price_min as f64 + price_max as f64) / 2.0;
    if mid <= 0.0 {
        return 0.0;
    }

    let budget = budget_cents as f64;
    if mid <= budget {
        return 1.0 - 0.3 * (mid / budget);
    }

    let over_ratio = mid / budget;
    (1.0 - (over_ratio - 1.0) * 2.0).max(0.0)
}

#[inline]
pub fn reliability_score(creator: &Creator) -> f64 {
    creator.reliability_score
}

/// Score a creator on all five dimensions, rounded to 2 decimals
pub fn compute_breakdown(
    creator: &Creator,
    request: &RecommendationRequest,
    stats: &GlobalStats,
) -> FitBreakdown {
    FitBreakdown {
        tags: round2(tags_score(&request.tags_required, &creator.tags)),
        audience_overlap: round2(audience_score(&request.audience_target, creator)),
        performance: round2(performance_score(creator, stats)),
        budget_fit: round2(budget_score(creator.price_min, creator.price_max, request.budget_cents)),
        reliability: round2(reliability_score(creator)),
    }
}

/// Weighted sum of the breakdown times the conflict penalty, rounded
pub fn compute_final_score(breakdown: &FitBreakdown, weights: &ScoringWeights, penalty: f64) -> f64 {
    let base = weights.tags * breakdown.tags
        + weights.audience_overlap * breakdown.audience_overlap
        + weights.performance * breakdown.performance
        + weights.budget_fit * breakdown.budget_fit
        + weights.reliability * breakdown.reliability;

    round2(base * penalty)
}

fn expand_ages(ranges: &[AgeRange]) -> HashSet<u8> {
    ranges.iter().flat_map(|r| r.min..=r.max).collect()
}

fn jaccard<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
