// HTTP API tests against the in-memory store

use actix_web::{http::StatusCode, test, web, App};
use donation_matcher::core::Matcher;
use donation_matcher::routes::{self, AppState};
use donation_matcher::services::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()), Matcher::with_default_weights())
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_index_banner() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, web::Bytes::from_static(b"Donation Matcher API is running!"));
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["status"], "healthy");
}

#[actix_web::test]
async fn test_create_and_list_records() {
    let app = init_app!();

    for name in ["Asha", "Bilal"] {
        let req = test::TestRequest::post()
            .uri("/api/victims")
            .set_json(json!({"name": name, "need_type": "Food", "income": "abc"}))
            .to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["ok"], true);
    }

    let req = test::TestRequest::get().uri("/api/victims").to_request();
    let victims: Value = test::call_and_read_body_json(&app, req).await;
    let victims = victims.as_array().unwrap();

    // Newest first
    assert_eq!(victims.len(), 2);
    assert_eq!(victims[0]["name"], "Bilal");
    assert_eq!(victims[0]["id"], 2);
    assert_eq!(victims[1]["name"], "Asha");
    assert_eq!(victims[1]["income"], 0);
    assert_eq!(victims[1]["urgency"], "Low");
    assert_eq!(victims[1]["has_home"], false);
}

#[actix_web::test]
async fn test_json_without_content_type() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/donors")
        .set_payload(r#"{"name":"Sana","resource_type":"food","donation_amount":"750"}"#)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["id"], 1);

    let req = test::TestRequest::get().uri("/api/donors").to_request();
    let donors: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(donors[0]["donation_amount"], 750);
}

#[actix_web::test]
async fn test_malformed_json_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/victims")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_matches_end_to_end() {
    let app = init_app!();

    let victims = [
        json!({"name": "Low", "need_type": "Food", "urgency": "Low", "income": 1000, "has_home": "Yes", "amount_needed": 100}),
        json!({"name": "High", "need_type": "Food", "urgency": "High", "income": 1000, "has_home": "No", "amount_needed": 200}),
        json!({"name": "Shelter", "need_type": "Shelter", "urgency": "High", "income": 10, "amount_needed": 100}),
        json!({"name": "Expensive", "need_type": "food", "urgency": "High", "income": 10, "amount_needed": 9000}),
    ];
    for v in victims {
        let req = test::TestRequest::post().uri("/api/victims").set_json(v).to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/api/donors")
        .set_json(json!({"name": "Donor", "resource_type": "FOOD", "donation_amount": 500}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/matches").to_request();
    let matches: Value = test::call_and_read_body_json(&app, req).await;
    let matches = matches.as_array().unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["victim"]["name"], "High");
    assert_eq!(matches[0]["victim"]["need_score"], 31.02);
    assert_eq!(matches[0]["victim"]["has_home"], false);
    assert_eq!(matches[0]["donor"]["resource_type"], "FOOD");
    assert_eq!(matches[1]["victim"]["name"], "Low");
    assert_eq!(matches[1]["victim"]["need_score"], 10.01);
    assert_eq!(matches[0]["donor"]["id"], matches[1]["donor"]["id"]);
}

#[actix_web::test]
async fn test_reset_clears_everything() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/donors")
        .set_json(json!({"name": "D", "resource_type": "food", "donation_amount": 5}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/reset").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["ok"], true);

    let req = test::TestRequest::get().uri("/api/donors").to_request();
    let donors: Value = test::call_and_read_body_json(&app, req).await;
    assert!(donors.as_array().unwrap().is_empty());

    let req = test::TestRequest::get().uri("/api/matches").to_request();
    let matches: Value = test::call_and_read_body_json(&app, req).await;
    assert!(matches.as_array().unwrap().is_empty());
}
