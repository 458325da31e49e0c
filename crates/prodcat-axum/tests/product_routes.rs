//! Integration tests for the catalog HTTP API.
//!
//! These drive the real router with the in-memory backend and verify the
//! wire contract: status codes, exact error bodies, JSON shapes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use prodcat_axum::bootstrap::CorsConfig;
use prodcat_axum::routes::create_router;
use prodcat_axum::state::AppContext;
use prodcat_core::Info;
use prodcat_store::StoreFactory;

/// Router over a fresh in-memory repository.
fn test_app() -> Router {
    let ctx = AppContext {
        products: StoreFactory::in_memory(),
        info: Info::new("I am awesome!", "1.0.0", None),
    };
    create_router(ctx, &CorsConfig::AllowAll)
}

async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_product(app: Router, body: &str) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/products")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn is_json(response: &Response<axum::body::Body>) -> bool {
    response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap_or("").starts_with("application/json"))
        .unwrap_or(false)
}

#[tokio::test]
async fn root_reports_service_info() {
    let response = get(test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(is_json(&response));

    let info: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(info["status"], "I am awesome!");
    assert_eq!(info["version"], "1.0.0");
    assert!(info["appMode"].is_null());
}

#[tokio::test]
async fn app_mode_shows_up_in_info_payload() {
    let ctx = AppContext {
        products: StoreFactory::in_memory(),
        info: Info::new("I am awesome!", "1.0.0", Some("staging".to_string())),
    };
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let info: serde_json::Value =
        serde_json::from_str(&body_string(get(app, "/").await).await).unwrap();
    assert_eq!(info["appMode"], "staging");
}

#[tokio::test]
async fn posting_valid_products_returns_increasing_ids() {
    let app = test_app();

    let first = post_product(app.clone(), r#"{"description": "widget", "price": 10.5}"#).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert!(is_json(&first));
    assert_eq!(body_string(first).await, "1");

    let second = post_product(app.clone(), r#"{"description": "gadget", "price": 3.0}"#).await;
    assert_eq!(body_string(second).await, "2");

    let third = post_product(app, r#"{"description": "gizmo", "price": 0}"#).await;
    assert_eq!(body_string(third).await, "3");
}

#[tokio::test]
async fn malformed_body_is_rejected_with_contract_message() {
    let response = post_product(test_app(), "not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Json payload invalid");
}

#[tokio::test]
async fn wrongly_typed_field_is_a_payload_error_not_a_validation_error() {
    let response = post_product(test_app(), r#"{"description": 3, "price": 1.0}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Json payload invalid");
}

#[tokio::test]
async fn missing_description_fails_validation() {
    let response = post_product(test_app(), r#"{"price": 5}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Product input invalid");
}

#[tokio::test]
async fn empty_description_fails_validation() {
    let response = post_product(test_app(), r#"{"description": "", "price": 5}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Product input invalid");
}

#[tokio::test]
async fn missing_price_fails_validation() {
    let response = post_product(test_app(), r#"{"description": "widget"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Product input invalid");
}

#[tokio::test]
async fn fresh_catalog_lists_an_empty_array() {
    let response = get(test_app(), "/products").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(is_json(&response));
    assert_eq!(body_string(response).await, "[]");
}

#[tokio::test]
async fn added_products_round_trip_through_the_listing() {
    let app = test_app();

    post_product(app.clone(), r#"{"description": "widget", "price": 10.5}"#).await;
    post_product(app.clone(), r#"{"description": "gadget", "price": 0.25}"#).await;

    let response = get(app, "/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let products: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        products,
        serde_json::json!([
            {"id": 1, "description": "widget", "price": 10.5},
            {"id": 2, "description": "gadget", "price": 0.25}
        ])
    );
}

#[tokio::test]
async fn rejected_submissions_do_not_consume_ids() {
    let app = test_app();

    post_product(app.clone(), r#"{"price": 5}"#).await;
    post_product(app.clone(), "not json").await;

    let response = post_product(app, r#"{"description": "widget", "price": 1.0}"#).await;
    assert_eq!(body_string(response).await, "1");
}
