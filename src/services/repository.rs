use crate::models::{Creator, PastDeal};

/// Read access to the creator corpus.
///
/// Ordering of `list` is not guaranteed; ranking never depends on it.
pub trait CreatorRepository: Send + Sync {
    fn list(&self) -> &[Creator];
}

/// Campaign tag lookup used by the conflict penalty.
pub trait CampaignRepository: Send + Sync {
    /// Tags required by the campaign, empty when the campaign is unknown
    fn tags_required(&self, campaign_id: &str) -> &[String];
}

/// Past deal history indexed by creator.
pub trait PastDealRepository: Send + Sync {
    fn by_creator(&self, creator_id: &str) -> &[PastDeal];
}
