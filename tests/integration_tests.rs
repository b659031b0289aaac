// Integration tests for the numerology HTTP API

use actix_web::{http::StatusCode, test, web, App};
use numerology::core::Numerologist;
use numerology::routes::{self, AppState};
use serde_json::{json, Value};

macro_rules! init_app {
    () => {
        init_app!(Numerologist::with_defaults())
    };
    ($numerologist:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { numerologist: $numerologist }))
                .configure(routes::configure_extractors)
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_life_path_with_meaning() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .set_json(json!({ "birthDate": "1990-03-15" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["birthDate"], "1990-03-15");
    assert_eq!(body["lifePathNumber"], 1);
    assert_eq!(body["isMaster"], false);
    assert_eq!(body["meaning"]["title"], "Единица");
    assert_eq!(body["meaning"]["traits"], "Амбициозность, инициативность, уверенность в себе");
}

#[actix_web::test]
async fn test_life_path_master_number_has_null_meaning() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .set_json(json!({ "birthDate": "2007-02-22" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["lifePathNumber"], 33);
    assert_eq!(body["isMaster"], true);
    assert!(body["meaning"].is_null());
}

#[actix_web::test]
async fn test_life_path_accepts_snake_case_field() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .set_json(json!({ "birth_date": "2009-09-09" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["lifePathNumber"], 11);
}

#[actix_web::test]
async fn test_life_path_rejects_invalid_date() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .set_json(json!({ "birthDate": "2023-02-30" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_date");
    assert_eq!(body["status_code"], 400);
}

#[actix_web::test]
async fn test_life_path_rejects_blank_date() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .set_json(json!({ "birthDate": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "empty_date");
}

#[actix_web::test]
async fn test_life_path_rejects_empty_string() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .set_json(json!({ "birthDate": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "empty_date");
    assert!(body["message"].as_str().unwrap().starts_with("birthDate:"));
}

#[actix_web::test]
async fn test_compatibility_empty_second_date_reports_empty_date() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "birthDate1": "1990-03-15", "birthDate2": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "empty_date");
    assert!(body["message"].as_str().unwrap().starts_with("birthDate2:"));
}

#[actix_web::test]
async fn test_life_path_rejects_two_digit_year() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .set_json(json!({ "birthDate": "90-03-15" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_date");
}

#[actix_web::test]
async fn test_malformed_json_returns_json_error() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/life-path")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_compatibility_from_table() {
    let app = init_app!();

    // 1990-03-15 -> 1, 1997-01-01 -> 1
    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "birthDate1": "1990-03-15", "birthDate2": "1997-01-01" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["first"]["lifePathNumber"], 1);
    assert_eq!(body["second"]["lifePathNumber"], 1);
    assert_eq!(body["score"], 85);
    assert_eq!(body["tier"], "excellent");
    assert_eq!(body["label"], "Отличная совместимость");
}

#[actix_web::test]
async fn test_compatibility_master_number_falls_back() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "birthDate1": "2009-09-09", "birthDate2": "1990-03-15" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["first"]["lifePathNumber"], 11);
    assert_eq!(body["score"], 75);
    assert_eq!(body["tier"], "good");
}

#[actix_web::test]
async fn test_compatibility_uses_configured_fallback() {
    let app = init_app!(Numerologist::new(50));

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "birthDate1": "2009-09-09", "birthDate2": "2009-02-09" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["score"], 50);
    assert_eq!(body["tier"], "moderate");
}

#[actix_web::test]
async fn test_compatibility_rejects_second_invalid_date() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "birthDate1": "1990-03-15", "birthDate2": "yesterday" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("birthDate2"));
}

#[actix_web::test]
async fn test_compatibility_requires_both_dates() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility")
        .set_json(json!({ "birthDate1": "1990-03-15" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_meanings() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/meanings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let meanings = body["meanings"].as_array().unwrap();
    assert_eq!(meanings.len(), 9);
    assert_eq!(meanings[0]["number"], 1);
    assert_eq!(meanings[8]["number"], 9);
    assert_eq!(meanings[8]["title"], "Девятка");
}

#[actix_web::test]
async fn test_get_meaning() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/meanings/6").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["number"], 6);
    assert_eq!(body["isMaster"], false);
    assert_eq!(body["meaning"]["title"], "Шестерка");
}

#[actix_web::test]
async fn test_get_meaning_master_number() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/meanings/22").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["isMaster"], true);
    assert!(body["meaning"].is_null());
}

#[actix_web::test]
async fn test_get_meaning_rejects_non_life_path_number() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/meanings/10").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_number");
}

#[actix_web::test]
async fn test_get_meaning_rejects_non_numeric_path() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/meanings/seven").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_path");
}
