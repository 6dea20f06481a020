use std::collections::HashMap;

use crate::models::{Campaign, Creator, PastDeal};
use crate::services::repository::{CampaignRepository, CreatorRepository, PastDealRepository};

/// In-memory creator store, keeps load order
#[derive(Debug, Clone, Default)]
pub struct CreatorStore {
    creators: Vec<Creator>,
    index: HashMap<String, usize>,
}

impl CreatorStore {
    pub fn new(creators: Vec<Creator>) -> Self {
        let index = creators
            .iter()
            .enumerate()
            .map(|(i, creator)| (creator.id.clone(), i))
            .collect();
        Self { creators, index }
    }

    pub fn get(&self, id: &str) -> Option<&Creator> {
        self.index.get(id).map(|&i| &self.creators[i])
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    /// Creators carrying `tag` (if given) and serving `country` (if given)
    pub fn filter(&self, tag: Option<&str>, country: Option<&str>) -> Vec<&Creator> {
        self.creators
            .iter()
            .filter(|c| tag.map_or(true, |t| c.tags.iter().any(|ct| ct == t)))
            .filter(|c| country.map_or(true, |k| c.audience_location.iter().any(|loc| loc == k)))
            .collect()
    }
}

impl CreatorRepository for CreatorStore {
    fn list(&self) -> &[Creator] {
        &self.creators
    }
}

/// In-memory campaign registry
#[derive(Debug, Clone, Default)]
pub struct CampaignStore {
    campaigns: Vec<Campaign>,
    index: HashMap<String, usize>,
}

impl CampaignStore {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        let index = campaigns
            .iter()
            .enumerate()
            .map(|(i, campaign)| (campaign.id.clone(), i))
            .collect();
        Self { campaigns, index }
    }

    pub fn get(&self, id: &str) -> Option<&Campaign> {
        self.index.get(id).map(|&i| &self.campaigns[i])
    }

    pub fn all(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

impl CampaignRepository for CampaignStore {
    fn tags_required(&self, campaign_id: &str) -> &[String] {
        self.get(campaign_id)
            .map(|c| c.tags_required.as_slice())
            .unwrap_or(&[])
    }
}

/// In-memory past deal history grouped by creator
#[derive(Debug, Clone, Default)]
pub struct PastDealStore {
    by_creator: HashMap<String, Vec<PastDeal>>,
    total: usize,
}

impl PastDealStore {
    pub fn new(deals: Vec<PastDeal>) -> Self {
        let total = deals.len();
        let mut by_creator: HashMap<String, Vec<PastDeal>> = HashMap::new();
        for deal in deals {
            by_creator.entry(deal.creator_id.clone()).or_default().push(deal);
        }
        Self { by_creator, total }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl PastDealRepository for PastDealStore {
    fn by_creator(&self, creator_id: &str) -> &[PastDeal] {
        self.by_creator
            .get(creator_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// The three read-only datasets the recommender scores against
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub creators: CreatorStore,
    pub campaigns: CampaignStore,
    pub past_deals: PastDealStore,
}

impl Catalog {
    pub fn new(creators: Vec<Creator>, campaigns: Vec<Campaign>, past_deals: Vec<PastDeal>) -> Self {
        Self {
            creators: CreatorStore::new(creators),
            campaigns: CampaignStore::new(campaigns),
            past_deals: PastDealStore::new(past_deals),
        }
    }
}
