use crate::models::Creator;

/// Corpus-wide bounds used to normalize performance metrics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlobalStats {
    pub min_views: f64,
    pub max_views: f64,
    pub min_ctr: f64,
    pub max_ctr: f64,
    pub min_cvr: f64,
    pub max_cvr: f64,
}

/// Compute min/max of views, CTR and CVR across the corpus.
///
/// An empty corpus yields all-zero bounds.
pub fn compute_global_stats(creators: &[Creator]) -> GlobalStats {
    let Some(first) = creators.first() else {
        return GlobalStats::default();
    };

    let seed = GlobalStats {
        min_views: first.avg_views as f64,
        max_views: first.avg_views as f64,
        min_ctr: first.ctr,
        max_ctr: first.ctr,
        min_cvr: first.cvr,
        max_cvr: first.cvr,
    };

    creators.iter().skip(1).fold(seed, |stats, creator| {
        let views = creator.avg_views as f64;
        GlobalStats {
            min_views: stats.min_views.min(views),
            max_views: stats.max_views.max(views),
            min_ctr: stats.min_ctr.min(creator.ctr),
            max_ctr: stats.max_ctr.max(creator.ctr),
            min_cvr: stats.min_cvr.min(creator.cvr),
            max_cvr: stats.max_cvr.max(creator.cvr),
        }
    })
}
