use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use creator_match::config::{LoggingSettings, Settings};
use creator_match::core::Recommender;
use creator_match::error::{handle_json_payload_error, handle_query_payload_error};
use creator_match::routes::{self, AppState};
use creator_match::services::Catalog;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting Creator Match recommendation service...");

    let catalog = Catalog::load_from_dir(&settings.data.dir).map_err(|e| {
        error!("Failed to load datasets: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    let recommender = Recommender::with_default_weights();

    info!("Recommender initialized with weights: {:?}", recommender.weights());

    let app_state = AppState {
        catalog: Arc::new(catalog),
        recommender,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
