// Core algorithm exports
pub mod penalty;
pub mod ranker;
pub mod rationale;
pub mod recommender;
pub mod scoring;
pub mod stats;

pub use penalty::{conflict_penalty, niche_penalty, NicheCounter};
pub use ranker::{diversify, rank, RankedEntry};
pub use rationale::generate_rationale;
pub use recommender::Recommender;
pub use scoring::{compute_breakdown, compute_final_score, round2};
pub use stats::{compute_global_stats, GlobalStats};
