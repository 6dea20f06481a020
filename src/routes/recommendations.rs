use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::RecommendationRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::post().to(recommend));
}

/// Recommend creators for a campaign brief
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "goal": "installs",
///   "tags_required": ["fintech"],
///   "audience_target": { "country": ["BR"], "age_range": [{ "min": 20, "max": 34 }] },
///   "budget_cents": 5000000,
///   "deadline": "2025-10-30",
///   "top_k": 10,
///   "diversity": false
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for recommendation request: {}", errors);
        return Err(errors.into());
    }

    let request = req.into_inner();

    tracing::info!(
        "Recommending creators for goal: {}, tags: {:?}, top_k: {}, diversity: {}",
        request.goal,
        request.tags_required,
        request.top_k(),
        request.diversity()
    );

    let catalog = &state.catalog;
    let response = state.recommender.recommend(
        &request,
        &catalog.creators,
        &catalog.campaigns,
        &catalog.past_deals,
    );

    tracing::info!(
        "Returning {} recommendations (from {} creators)",
        response.recommendations.len(),
        response.metadata.total_creators
    );

    Ok(HttpResponse::Ok().json(response))
}
