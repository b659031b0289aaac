use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use numerology::config::Settings;
use numerology::core::Numerologist;
use numerology::logging::init_logging;
use numerology::routes::{self, AppState};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting numerology service...");
    info!("Configuration loaded successfully");

    let numerologist = Numerologist::new(settings.numerology.fallback_score);

    info!("Numerologist initialized (fallback score: {})", numerologist.fallback_score());

    let app_state = AppState { numerologist };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} with {} workers", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))
    .inspect_err(|e| error!("Failed to bind HTTP server: {}", e))?
    .run()
    .await
}
