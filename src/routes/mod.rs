// Route exports
pub mod catalog;
pub mod recommendations;

use actix_web::web;
use std::sync::Arc;

use crate::core::Recommender;
use crate::services::Catalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(catalog::configure)
            .configure(recommendations::configure),
    );
}
