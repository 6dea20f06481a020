use std::cmp::Ordering;

use crate::core::penalty::NicheCounter;
use crate::core::scoring::round2;
use crate::models::ScoredCreator;

/// Scored creator plus the primary tag used for diversity bucketing
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub primary_tag: String,
    pub result: ScoredCreator,
}

/// Descending score, ties broken by ascending creator id
#[inline]
fn by_score_desc(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.result
        .score
        .total_cmp(&a.result.score)
        .then_with(|| a.result.creator_id.cmp(&b.result.creator_id))
}

/// Sort entries best first
pub fn rank(entries: &mut [RankedEntry]) {
    entries.sort_by(by_score_desc);
}

/// Apply the niche penalty in current order, then re-rank.
///
/// `entries` must already be ranked. Each entry's penalty only sees the
/// entries processed before it, so the counter is bumped after scoring.
pub fn diversify(entries: &mut [RankedEntry], niches: &mut NicheCounter) {
    for entry in entries.iter_mut() {
        let penalty = niches.penalty(&entry.primary_tag);
        entry.result.score = round2(entry.result.score * penalty);
        niches.record(&entry.primary_tag);
    }

    rank(entries);
}
