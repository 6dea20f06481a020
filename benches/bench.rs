// Criterion benchmarks for Creator Match

use creator_match::core::{compute_global_stats, scoring::{age_overlap_score, tags_score}, Recommender};
use creator_match::models::{AgeRange, AudienceTarget, Creator, RecommendationRequest};
use creator_match::services::{Catalog, CreatorRepository};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const TAGS: &[&str] = &[
    "fintech", "fitness", "skincare", "gaming", "food",
    "travel", "tech", "fashion", "music", "education",
];
const COUNTRIES: &[&str] = &["BR", "US", "MX", "AR", "CO", "PT", "ES", "UK", "DE", "FR"];

fn create_creator(rng: &mut StdRng, id: usize) -> Creator {
    let tag_count = rng.gen_range(1..=4);
    let country_count = rng.gen_range(1..=3);
    let price_min = rng.gen_range(5_000..=400_000);

    Creator {
        id: format!("creator_{:04}", id),
        name: format!("Creator {}", id),
        tags: TAGS.choose_multiple(rng, tag_count).map(|t| t.to_string()).collect(),
        audience_age: vec![AgeRange::new(18, 24), AgeRange::new(25, 34)],
        audience_location: COUNTRIES.choose_multiple(rng, country_count).map(|c| c.to_string()).collect(),
        avg_views: rng.gen_range(5_000..=5_000_000),
        ctr: rng.gen_range(0.005..0.15),
        cvr: rng.gen_range(0.001..0.08),
        price_min,
        price_max: price_min + rng.gen_range(5_000..=100_000),
        reliability_score: rng.gen_range(0.5..1.0),
    }
}

fn create_request(diversity: bool) -> RecommendationRequest {
    RecommendationRequest {
        goal: "installs".to_string(),
        tags_required: vec!["fintech".to_string(), "tech".to_string()],
        audience_target: AudienceTarget {
            country: vec!["BR".to_string(), "MX".to_string()],
            age_range: vec![AgeRange::new(18, 34)],
        },
        budget_cents: 5_000_000,
        deadline: chrono::NaiveDate::from_ymd_opt(2025, 10, 30).unwrap(),
        top_k: Some(20),
        diversity: Some(diversity),
    }
}

fn create_catalog(count: usize) -> Catalog {
    let mut rng = StdRng::seed_from_u64(7);
    let creators = (0..count).map(|i| create_creator(&mut rng, i)).collect();
    Catalog::new(creators, vec![], vec![])
}

fn bench_dimension_scorers(c: &mut Criterion) {
    let campaign_tags = vec!["fintech".to_string(), "tech".to_string(), "gaming".to_string()];
    let creator_tags = vec!["fintech".to_string(), "fitness".to_string()];

    c.bench_function("tags_score", |b| {
        b.iter(|| tags_score(black_box(&campaign_tags), black_box(&creator_tags)));
    });

    let campaign_ages = [AgeRange::new(18, 24), AgeRange::new(25, 34)];
    let creator_ages = [AgeRange::new(20, 44)];

    c.bench_function("age_overlap_score", |b| {
        b.iter(|| age_overlap_score(black_box(&campaign_ages), black_box(&creator_ages)));
    });
}

fn bench_global_stats(c: &mut Criterion) {
    let catalog = create_catalog(1_000);

    c.bench_function("global_stats_1000_creators", |b| {
        b.iter(|| compute_global_stats(black_box(catalog.creators.list())));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_default_weights();
    let mut group = c.benchmark_group("recommend");

    for creator_count in [10, 150, 1_000, 5_000].iter() {
        let catalog = create_catalog(*creator_count);

        for diversity in [false, true] {
            let request = create_request(diversity);
            let name = if diversity { "diverse" } else { "plain" };

            group.bench_with_input(
                BenchmarkId::new(name, creator_count),
                creator_count,
                |b, _| {
                    b.iter(|| {
                        recommender.recommend(
                            black_box(&request),
                            &catalog.creators,
                            &catalog.campaigns,
                            &catalog.past_deals,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dimension_scorers,
    bench_global_stats,
    bench_recommend
);

criterion_main!(benches);
