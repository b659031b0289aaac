use actix_web::{web, HttpResponse, Responder};
use validator::{Validate, ValidationErrors};
use crate::core::{all_meanings, meaning_for, Numerologist};
use crate::models::{
    BirthDate, CompatibilityRequest, CompatibilityResponse, DateError, ErrorResponse,
    HealthResponse, LifePathNumber, LifePathRequest, LifePathResponse, MeaningEntry,
    MeaningResponse, MeaningsResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub numerologist: Numerologist,
}

/// Configure all numerology routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/life-path", web::post().to(life_path))
        .route("/compatibility", web::post().to(compatibility))
        .route("/meanings", web::get().to(list_meanings))
        .route("/meanings/{number}", web::get().to(get_meaning));
}

fn date_error_response(field: &str, err: &DateError) -> HttpResponse {
    let error = match err {
        DateError::Empty => "empty_date",
        DateError::Invalid(_) | DateError::OutOfRange(_) => "invalid_date",
    };

    HttpResponse::BadRequest().json(ErrorResponse::bad_request(error, format!("{}: {}", field, err)))
}

/// Date fields only carry `length(min = 1)`, so a failed check is an empty date
///
/// `fields` maps struct field names to their JSON names.
fn validation_error_response(errors: &ValidationErrors, fields: &[(&str, &str)]) -> HttpResponse {
    let field_errors = errors.field_errors();
    let field = fields
        .iter()
        .find(|(name, _)| field_errors.keys().any(|k| k.to_string() == *name))
        .map_or("birthDate", |(_, json_name)| *json_name);

    date_error_response(field, &DateError::Empty)
}

fn parse_field(field: &str, value: &str) -> Result<BirthDate, HttpResponse> {
    BirthDate::parse(value).map_err(|e| {
        tracing::warn!("Rejected {} '{}': {}", field, value, e);
        date_error_response(field, &e)
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Life path endpoint
///
/// POST /api/v1/life-path
///
/// Request body:
/// ```json
/// { "birthDate": "1990-03-15" }
/// ```
async fn life_path(
    state: web::Data<AppState>,
    req: web::Json<LifePathRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for life_path request: {:?}", errors);
        return validation_error_response(&errors, &[("birth_date", "birthDate")]);
    }

    let birth_date = match parse_field("birthDate", &req.birth_date) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let reading: LifePathResponse = state.numerologist.reading(&birth_date);

    tracing::info!(
        "Life path for {} is {} (master: {})",
        birth_date,
        reading.number,
        reading.is_master
    );

    HttpResponse::Ok().json(reading)
}

/// Compatibility endpoint
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// { "birthDate1": "1990-03-15", "birthDate2": "1985-11-02" }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for compatibility request: {:?}", errors);
        return validation_error_response(
            &errors,
            &[("birth_date1", "birthDate1"), ("birth_date2", "birthDate2")],
        );
    }

    let first = match parse_field("birthDate1", &req.birth_date1) {
        Ok(date) => date,
        Err(response) => return response,
    };
    let second = match parse_field("birthDate2", &req.birth_date2) {
        Ok(date) => date,
        Err(response) => return response,
    };

    let report = state.numerologist.compatibility(&first, &second);

    tracing::info!(
        "Compatibility of {} ({}) and {} ({}) is {}",
        first,
        report.first.number,
        second,
        report.second.number,
        report.score
    );

    HttpResponse::Ok().json(CompatibilityResponse::from(report))
}

/// List every defined number meaning
///
/// GET /api/v1/meanings
async fn list_meanings() -> impl Responder {
    let meanings = all_meanings()
        .map(|(number, meaning)| MeaningEntry { number, meaning })
        .collect();

    HttpResponse::Ok().json(MeaningsResponse { meanings })
}

/// Look up the meaning of one number
///
/// GET /api/v1/meanings/{number}
///
/// Master numbers answer with `"meaning": null`.
async fn get_meaning(path: web::Path<u8>) -> impl Responder {
    let value = path.into_inner();

    let number = match LifePathNumber::try_from(value) {
        Ok(number) => number,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
                "invalid_number",
                e.to_string(),
            ));
        }
    };

    HttpResponse::Ok().json(MeaningResponse {
        number,
        is_master: number.is_master(),
        meaning: meaning_for(number),
    })
}
