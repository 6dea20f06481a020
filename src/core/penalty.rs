use std::collections::HashMap;

use crate::core::scoring::tags_score;
use crate::models::PastDeal;
use crate::services::CampaignRepository;

/// Multiplier for creators who worked on a tag-overlapping campaign
pub const CONFLICT_PENALTY: f64 = 0.75;
/// Jaccard overlap above which a past deal counts as a conflict
pub const CONFLICT_THRESHOLD: f64 = 0.5;

pub const NICHE_STEP: f64 = 0.15;
pub const NICHE_FLOOR: f64 = 0.55;

/// Conflict-of-interest multiplier for a creator's deal history.
///
/// Returns 0.75 as soon as one past campaign's required tags overlap the
/// current tags with Jaccard > 0.5, otherwise 1.0.
pub fn conflict_penalty<R>(deals: &[PastDeal], campaign_tags: &[String], campaigns: &R) -> f64
where
    R: CampaignRepository + ?Sized,
{
    let conflicted = deals.iter().any(|deal| {
        tags_score(campaign_tags, campaigns.tags_required(&deal.campaign_id)) > CONFLICT_THRESHOLD
    });

    if conflicted {
        CONFLICT_PENALTY
    } else {
        1.0
    }
}

/// Niche multiplier after `occurrences` higher-ranked creators with the same primary tag
#[inline]
pub fn niche_penalty(occurrences: u32) -> f64 {
    if occurrences == 0 {
        return 1.0;
    }
    (1.0 - NICHE_STEP * occurrences as f64).max(NICHE_FLOOR)
}

/// Running count of primary tags already placed during the diversity pass.
///
/// Built fresh for every request.
#[derive(Debug, Clone, Default)]
pub struct NicheCounter {
    counts: HashMap<String, u32>,
}

impl NicheCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter pre-seeded with existing occurrences
    pub fn with_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            counts: counts.into_iter().map(|(tag, n)| (tag.into(), n)).collect(),
        }
    }

    pub fn count(&self, tag: &str) -> u32 {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Penalty for the next creator in `tag`'s niche
    pub fn penalty(&self, tag: &str) -> f64 {
        niche_penalty(self.count(tag))
    }

    pub fn record(&mut self, tag: &str) {
        *self.counts.entry(tag.to_string()).or_insert(0) += 1;
    }
}
