// Route exports
pub mod errors;
pub mod numerology;

use actix_web::web;

pub use errors::{handle_json_payload_error, handle_path_error, JsonError};
pub use numerology::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(numerology::configure),
    );
}

/// Register extractor error handlers so every failure answers with JSON
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}
