// Integration tests for Love Algo HTTP surface

use actix_web::{http::StatusCode, test, web, App};
use love_algo::models::AgeRange;
use love_algo::routes::{self, AppState};
use love_algo::services::SessionStore;
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state() -> AppState {
    AppState {
        sessions: Arc::new(SessionStore::new(100, 60)),
        sweep_range: AgeRange::default(),
    }
}

fn best_case_inputs() -> Value {
    json!({
        "user": { "age": 30, "income": 2400, "goal": "Family/Kids" },
        "candidate": { "name": "Ana", "age": 25, "hasKids": false },
        "missions": {
            "boundaryTestOutcome": "calm acceptance",
            "intellectualTestOutcome": "asked with interest",
            "exPartnerNarrative": "It was my fault, I grew from it"
        }
    })
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_integration_health() {
    let app = init_app!(app_state());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_integration_evaluate_best_case() {
    let app = init_app!(app_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluate")
        .set_json(best_case_inputs())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 100);
    assert_eq!(body["breakdown"]["Biological"], 20);
    assert_eq!(body["breakdown"]["Conflict"], 25);
    assert_eq!(body["breakdown"]["Intellect"], 25);
    assert_eq!(body["breakdown"]["Maturity"], 15);
    assert_eq!(body["reasons"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["reasons"][0]["severity"], "POSITIVE");
    assert_eq!(body["interpretation"]["odds"]["status"], "undefined");
    assert_eq!(body["interpretation"]["verdict"], "stable");
}

#[actix_web::test]
async fn test_integration_breakdown_key_order() {
    let app = init_app!(app_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluate")
        .set_json(best_case_inputs())
        .to_request();
    let bytes = test::call_and_read_body(&app, req).await;
    let raw = String::from_utf8_lossy(&bytes);

    let positions: Vec<usize> = ["\"Biological\":", "\"Conflict\":", "\"Intellect\":", "\"Maturity\":"]
        .iter()
        .map(|key| raw.find(key).expect("breakdown key present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[actix_web::test]
async fn test_integration_evaluate_worst_case() {
    let app = init_app!(app_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluate")
        .set_json(json!({
            "user": { "age": 30, "income": 0, "goal": "Casual" },
            "candidate": { "name": "Eva", "age": 40, "hasKids": true },
            "missions": {
                "boundaryTestOutcome": "manipulation/revenge",
                "intellectualTestOutcome": "ignored/phone",
                "exPartnerNarrative": "no"
            }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 0);
    assert_eq!(body["breakdown"]["Biological"], -10);
    assert_eq!(body["breakdown"]["Conflict"], -40);
    assert_eq!(body["breakdown"]["Intellect"], -30);
    assert_eq!(body["breakdown"]["Maturity"], -20);
    assert_eq!(body["interpretation"]["odds"]["status"], "undefined");
    assert_eq!(body["interpretation"]["strengths"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["interpretation"]["risks"].as_array().map(Vec::len), Some(4));
}

#[actix_web::test]
async fn test_integration_rejects_unknown_outcome() {
    let app = init_app!(app_state());

    let mut inputs = best_case_inputs();
    inputs["missions"]["boundaryTestOutcome"] = json!("shrugged");

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluate")
        .set_json(inputs)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_integration_rejects_out_of_range_age() {
    let app = init_app!(app_state());

    let mut inputs = best_case_inputs();
    inputs["candidate"]["age"] = json!(17);

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluate")
        .set_json(inputs)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_integration_sweep_default_range() {
    let app = init_app!(app_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/sweep")
        .set_json(json!({ "inputs": best_case_inputs() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let points = body["points"].as_array().expect("points array");
    assert_eq!(points.len(), 28);
    assert_eq!(points[0]["age"], 18);
    assert_eq!(points[27]["age"], 45);

    // 50 + 25 + 25 + 15 = 115 before the age contribution, so every age clamps
    for point in points {
        assert_eq!(point["score"], 100);
        assert_eq!(point["probability"], 1.0);
    }
}

#[actix_web::test]
async fn test_integration_sweep_rejects_inverted_range() {
    let app = init_app!(app_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/sweep")
        .set_json(json!({ "inputs": best_case_inputs(), "minAge": 40, "maxAge": 30 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_integration_wizard_flow() {
    let app = init_app!(app_state());

    // Phase 0: new session
    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["step"], "operator");
    assert_eq!(body["stepNumber"], 1);
    let id = body["sessionId"].as_str().expect("session id").to_string();

    // Phase 1
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/operator", id))
        .set_json(json!({ "age": 30, "income": 2400, "goal": "Stable Partner" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["step"], "subject");
    assert_eq!(body["collected"]["user"]["goal"], "Stable Partner");

    // Sweep is not available before the dashboard
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}/sweep", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Phase 2
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/subject", id))
        .set_json(json!({ "name": "Ana", "age": 35, "hasKids": false }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["step"], "field_ops");
    assert!(body["evaluation"].is_null());

    // Phase 3 -> dashboard, 50 + 10 - 15 + 5 + 15 = 65
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/field-ops", id))
        .set_json(json!({
            "boundaryTestOutcome": "visible annoyance",
            "intellectualTestOutcome": "listened passively",
            "exPartnerNarrative": "We grew apart over time"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["step"], "dashboard");
    assert_eq!(body["progress"], 1.0);
    assert_eq!(body["evaluation"]["total"], 65);
    assert_eq!(body["evaluation"]["interpretation"]["verdict"], "manageable_risk");
    assert_eq!(body["evaluation"]["interpretation"]["odds"]["status"], "defined");

    // Dashboard sweep over a narrowed range
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}/sweep?minAge=30&maxAge=39", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let scores: Vec<u64> = body["points"]
        .as_array()
        .expect("points array")
        .iter()
        .map(|p| p["score"].as_u64().unwrap())
        .collect();
    assert_eq!(scores, vec![75, 75, 75, 65, 65, 65, 65, 65, 45, 45]);

    // No forward transition out of the dashboard
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/operator", id))
        .set_json(json!({ "age": 30, "income": 2400, "goal": "Casual" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Reset clears everything
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/reset", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["step"], "operator");
    assert!(body["collected"]["user"].is_null());
    assert!(body["collected"]["candidate"].is_null());
    assert!(body["collected"]["missions"].is_null());
    assert!(body["evaluation"].is_null());
}

#[actix_web::test]
async fn test_integration_out_of_order_submission() {
    let app = init_app!(app_state());

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["sessionId"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/subject", id))
        .set_json(json!({ "name": "Ana", "age": 28, "hasKids": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Still waiting for phase 1
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["step"], "operator");
}

#[actix_web::test]
async fn test_integration_unknown_and_deleted_session() {
    let app = init_app!(app_state());

    let req = test::TestRequest::get()
        .uri("/api/v1/sessions/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["sessionId"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/sessions/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
