//! HTTP-level tests against the full application, driven in-process through
//! `actix_web::test`. Chaos profiles are pinned (zero delay, failure rate 0 or
//! 1, fixed seed) so outcomes are deterministic.

use std::path::PathBuf;
use std::time::Duration;

use actix_web::http::{header, Method, StatusCode};
use actix_web::{test, web};
use chrono::DateTime;
use demo_web_app::config::ChaosConfig;
use demo_web_app::domain::fault::FaultProfile;
use demo_web_app::{create_app, AppConfig, AppState};
use serde_json::{json, Value};

fn state(chaos: ChaosConfig) -> web::Data<AppState> {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        client_build_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("client/build"),
        chaos,
    };
    web::Data::new(AppState::from_config(&config))
}

fn calm() -> ChaosConfig {
    ChaosConfig {
        seed: Some(1),
        ..ChaosConfig::calm()
    }
}

fn always_failing() -> ChaosConfig {
    let fail = FaultProfile::new(Duration::ZERO, 1.0);
    ChaosConfig {
        users: fail,
        products: fail,
        orders: fail,
        seed: Some(1),
    }
}

fn assert_iso_timestamp(value: &Value) {
    let raw = value.as_str().expect("timestamp should be a string");
    assert!(raw.ends_with('Z'), "not UTC: {}", raw);
    assert_eq!(raw.len(), "2026-01-01T00:00:00.000Z".len(), "not millis: {}", raw);
    DateTime::parse_from_rfc3339(raw).expect("timestamp should parse as RFC 3339");
}

// ── Health ───────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn health_is_healthy_even_when_everything_else_fails() {
    let app = test::init_service(create_app(state(always_failing()))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_iso_timestamp(&body["timestamp"]);
}

#[actix_web::test]
async fn responses_carry_security_and_cors_headers() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
}

#[actix_web::test]
async fn cross_origin_order_preflight_is_allowed() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/orders")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "status {}", resp.status());

    let headers = resp.headers();
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

// ── Users ────────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn users_lists_sample_users() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let users = body.as_array().expect("array of users");
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[0]["name"], "John Doe");
    assert_eq!(users[0]["email"], "john@example.com");
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[1]["role"], "user");
    for user in users {
        assert_iso_timestamp(&user["lastLogin"]);
    }
}

#[actix_web::test]
async fn users_injected_failure_is_generic_500() {
    let app = test::init_service(create_app(state(always_failing()))).await;

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Failed to fetch users" }));
}

#[actix_web::test]
async fn users_failure_rate_is_about_five_percent() {
    let chaos = ChaosConfig {
        users: FaultProfile::new(Duration::ZERO, 0.05),
        seed: Some(2024),
        ..ChaosConfig::calm()
    };
    let app = test::init_service(create_app(state(chaos))).await;

    let mut failures = 0;
    for _ in 0..2_000 {
        let req = test::TestRequest::get().uri("/api/users").to_request();
        let resp = test::call_service(&app, req).await;
        match resp.status() {
            StatusCode::OK => {}
            StatusCode::INTERNAL_SERVER_ERROR => failures += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    // mean 100, sd ~10
    assert!((60..=140).contains(&failures), "failures = {}", failures);
}

// ── Products ─────────────────────────────────────────────────────────────────

async fn product_names(uri: &str) -> Vec<String> {
    let app = test::init_service(create_app(state(calm()))).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    body.as_array()
        .expect("array of products")
        .iter()
        .map(|p| p["name"].as_str().expect("name").to_string())
        .collect()
}

#[actix_web::test]
async fn products_lists_everything_without_filter() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "name": "Laptop Pro",
            "price": 1299.99,
            "category": "Electronics",
            "stock": 45
        })
    );
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[actix_web::test]
async fn products_filter_by_category_ignores_case() {
    assert_eq!(
        product_names("/api/products?category=electronics").await,
        vec!["Laptop Pro", "Wireless Headphones"]
    );
    assert_eq!(
        product_names("/api/products?category=APPLIANCES").await,
        vec!["Coffee Maker"]
    );
}

#[actix_web::test]
async fn products_filter_edge_cases() {
    assert_eq!(product_names("/api/products?category=").await.len(), 3);
    assert!(product_names("/api/products?category=Toys").await.is_empty());
    assert!(product_names("/api/products?category=Electronic").await.is_empty());
}

#[actix_web::test]
async fn products_repeated_category_is_json_error() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::get()
        .uri("/api/products?category=a&category=b")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"), "content type {}", content_type);

    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Invalid query string"), "message {}", message);
}

#[actix_web::test]
async fn products_never_fail_with_default_rate() {
    let chaos = ChaosConfig {
        products: FaultProfile::new(Duration::ZERO, FaultProfile::products().failure_rate),
        seed: Some(5),
        ..ChaosConfig::calm()
    };
    let app = test::init_service(create_app(state(chaos))).await;

    for _ in 0..500 {
        let req = test::TestRequest::get().uri("/api/products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn products_failure_is_generic_500_when_configured() {
    let app = test::init_service(create_app(state(always_failing()))).await;

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Failed to fetch products" }));
}

// ── Orders ───────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn order_is_confirmed_and_echoes_submission() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({ "userId": 1, "productIds": [2, 3], "total": 289.98 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let order: Value = test::read_body_json(resp).await;
    let id = order["id"].as_u64().expect("numeric id");
    assert!(id < 10_000);
    assert_eq!(order["userId"], 1);
    assert_eq!(order["productIds"], json!([2, 3]));
    assert_eq!(order["total"], 289.98);
    assert_eq!(order["status"], "confirmed");
    assert_iso_timestamp(&order["createdAt"]);
}

#[actix_web::test]
async fn order_total_is_echoed_verbatim() {
    let app = test::init_service(create_app(state(calm()))).await;

    for total in [json!(0), json!("12.50"), json!(199.99)] {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(json!({ "userId": 1, "productIds": [2], "total": total.clone() }))
            .to_request();
        let order: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(order["total"], total);
    }
}

#[actix_web::test]
async fn order_without_total_echoes_null() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({ "userId": 1, "productIds": [2] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let order: Value = test::read_body_json(resp).await;
    assert!(order["total"].is_null());
    assert_eq!(order["status"], "confirmed");
}

#[actix_web::test]
async fn order_ids_stay_in_range() {
    let app = test::init_service(create_app(state(calm()))).await;

    for _ in 0..200 {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(json!({ "userId": 7, "productIds": [], "total": 0 }))
            .to_request();
        let order: Value = test::call_and_read_body_json(&app, req).await;
        assert!(order["id"].as_u64().expect("numeric id") < 10_000);
    }
}

#[actix_web::test]
async fn order_payment_failure_is_generic_500() {
    let app = test::init_service(create_app(state(always_failing()))).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({ "userId": 1, "productIds": [1], "total": 1299.99 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Order processing failed" }));
}

#[actix_web::test]
async fn order_with_undecodable_body_is_400() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"userId\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

// ── Client bundle ────────────────────────────────────────────────────────────

#[actix_web::test]
async fn unknown_routes_serve_client_index() {
    let app = test::init_service(create_app(state(calm()))).await;

    for uri in ["/", "/products", "/some/deep/link", "/api/unknown"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "uri {}", uri);

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).expect("utf-8 html");
        assert!(html.contains("<title>Demo Web App</title>"), "uri {}", uri);
    }
}

#[actix_web::test]
async fn client_assets_are_served_as_files() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::get().uri("/static/js/app.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("javascript"), "content type {}", content_type);
}

#[actix_web::test]
async fn missing_client_bundle_is_404() {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        client_build_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("no-such-bundle"),
        chaos: calm(),
    };
    let app = test::init_service(create_app(web::Data::new(AppState::from_config(&config)))).await;

    let req = test::TestRequest::get().uri("/anything").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── API docs ─────────────────────────────────────────────────────────────────

#[actix_web::test]
async fn openapi_document_is_served() {
    let app = test::init_service(create_app(state(calm()))).await;

    let req = test::TestRequest::get().uri("/api-docs/openapi.json").to_request();
    let doc: Value = test::call_and_read_body_json(&app, req).await;

    for path in ["/api/health", "/api/users", "/api/products", "/api/orders"] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }
}
