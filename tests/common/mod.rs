// Shared fixtures for integration tests
#![allow(dead_code)]

use creator_match::models::{
    AgeRange, AudienceTarget, Campaign, Creator, PastDeal, RecommendationRequest,
};
use creator_match::services::Catalog;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const TAGS: &[&str] = &[
    "fintech", "fitness", "skincare", "gaming", "food",
    "travel", "tech", "fashion", "music", "education",
];

pub const COUNTRIES: &[&str] = &["BR", "US", "MX", "AR", "CO", "PT", "ES", "UK", "DE", "FR"];

const AGE_RANGES: &[(u8, u8)] = &[(13, 17), (18, 24), (25, 34), (35, 44), (45, 54)];

const CAMPAIGNS: &[(&str, &str, &[&str], &[&str])] = &[
    ("campaign_001", "installs", &["fintech", "tech"], &["BR", "MX"]),
    ("campaign_002", "installs", &["fitness"], &["BR", "US"]),
    ("campaign_003", "conversions", &["skincare", "fashion"], &["BR", "PT"]),
    ("campaign_004", "awareness", &["gaming", "tech"], &["BR", "US", "MX"]),
    ("campaign_005", "conversions", &["food"], &["BR", "AR", "CO"]),
    ("campaign_006", "engagement", &["travel"], &["BR", "PT", "ES"]),
    ("campaign_007", "installs", &["education", "tech"], &["BR", "US", "UK"]),
    ("campaign_008", "awareness", &["fashion", "skincare"], &["BR", "FR", "DE"]),
];

fn pick_n(rng: &mut StdRng, pool: &[&str], min: usize, max: usize) -> Vec<String> {
    let n = rng.gen_range(min..=max);
    pool.choose_multiple(rng, n).map(|s| s.to_string()).collect()
}

fn rand_float(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    (rng.gen_range(min..max) * 1000.0).round() / 1000.0
}

pub fn generate_creators(rng: &mut StdRng, count: usize) -> Vec<Creator> {
    (1..=count)
        .map(|i| {
            let price_min = rng.gen_range(5_000..=400_000);
            let price_max = (price_min + rng.gen_range(5_000..=100_000)).min(500_000);
            let age_count = rng.gen_range(1..=2);
            let ages = AGE_RANGES
                .choose_multiple(rng, age_count)
                .map(|&(min, max)| AgeRange::new(min, max))
                .collect();

            Creator {
                id: format!("creator_{:03}", i),
                name: format!("Creator {}", i),
                tags: pick_n(rng, TAGS, 1, 4),
                audience_age: ages,
                audience_location: pick_n(rng, COUNTRIES, 1, 3),
                avg_views: rng.gen_range(5_000..=5_000_000),
                ctr: rand_float(rng, 0.005, 0.15),
                cvr: rand_float(rng, 0.001, 0.08),
                price_min,
                price_max,
                reliability_score: rand_float(rng, 0.5, 1.0),
            }
        })
        .collect()
}

pub fn generate_campaigns() -> Vec<Campaign> {
    CAMPAIGNS
        .iter()
        .map(|&(id, goal, tags, countries)| Campaign {
            id: id.to_string(),
            brand: format!("Brand {}", id),
            goal: goal.to_string(),
            tags_required: tags.iter().map(|t| t.to_string()).collect(),
            audience_target: AudienceTarget {
                country: countries.iter().map(|c| c.to_string()).collect(),
                age_range: vec![AgeRange::new(18, 24), AgeRange::new(25, 34)],
            },
            budget_cents: 5_000_000,
            deadline: chrono::NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
        })
        .collect()
}

pub fn generate_past_deals(rng: &mut StdRng, count: usize, creators: &[Creator], campaigns: &[Campaign]) -> Vec<PastDeal> {
    (1..=count)
        .map(|i| PastDeal {
            id: format!("deal_{:03}", i),
            creator_id: creators[rng.gen_range(0..creators.len())].id.clone(),
            campaign_id: campaigns[rng.gen_range(0..campaigns.len())].id.clone(),
            delivered_on_time: rng.gen_bool(0.8),
            performance_score: (rng.gen_range(0.3..1.0_f64) * 100.0).round() / 100.0,
        })
        .collect()
}

/// Deterministic catalog: 150 creators, 8 campaigns, 80 past deals
pub fn seeded_catalog() -> Catalog {
    let mut rng = StdRng::seed_from_u64(42);
    let creators = generate_creators(&mut rng, 150);
    let campaigns = generate_campaigns();
    let past_deals = generate_past_deals(&mut rng, 80, &creators, &campaigns);
    Catalog::new(creators, campaigns, past_deals)
}

pub fn base_request() -> RecommendationRequest {
    RecommendationRequest {
        goal: "installs".to_string(),
        tags_required: vec!["fintech".to_string()],
        audience_target: AudienceTarget {
            country: vec!["BR".to_string()],
            age_range: vec![AgeRange::new(20, 34)],
        },
        budget_cents: 5_000_000,
        deadline: chrono::NaiveDate::from_ymd_opt(2025, 10, 30).unwrap(),
        top_k: None,
        diversity: None,
    }
}
