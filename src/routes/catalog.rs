use actix_web::{web, HttpResponse, Responder};

use crate::models::{CreatorQuery, HealthResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/creators", web::get().to(list_creators))
        .route("/campaigns", web::get().to(list_campaigns));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog = &state.catalog;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        creators: catalog.creators.len(),
        campaigns: catalog.campaigns.len(),
        past_deals: catalog.past_deals.len(),
    })
}

/// List creators
///
/// GET /api/v1/creators?tag={tag}&country={country}
///
/// Both filters are optional and combine with AND.
async fn list_creators(
    state: web::Data<AppState>,
    query: web::Query<CreatorQuery>,
) -> impl Responder {
    let creators = state
        .catalog
        .creators
        .filter(query.tag.as_deref(), query.country.as_deref());

    tracing::debug!(
        "Listing {} creators (tag: {:?}, country: {:?})",
        creators.len(),
        query.tag,
        query.country
    );

    HttpResponse::Ok().json(creators)
}

/// List campaigns
///
/// GET /api/v1/campaigns
async fn list_campaigns(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.campaigns.all())
}
