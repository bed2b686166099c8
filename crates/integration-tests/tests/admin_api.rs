//! Admin HTTP surface tests.

#![allow(clippy::unwrap_used)]

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use goldstart_admin::config::AdminConfig;
use goldstart_admin::state::AppState;
use goldstart_catalog::store::StoreConfig;

fn app_for(server: &MockServer) -> axum::Router {
    let config = AdminConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        store: StoreConfig {
            base_url: Url::parse(&server.uri()).unwrap(),
            api_key: SecretString::from("test-key"),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_traces_sample_rate: 0.0,
    };
    goldstart_admin::app(AppState::new(config))
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_category_responds_201_with_the_stored_entity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/categories"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "cat_77", "name": "Cables", "icon": "🔌",
            "created_at": "2026-02-01T10:00:00Z"
        })))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(json_request(
            Method::POST,
            "/api/categories",
            &json!({ "name": "Cables", "icon": "🔌" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], "cat_77");
    assert_eq!(created["name"], "Cables");
}

#[tokio::test]
async fn delete_item_responds_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/items/it_5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/items/it_5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_missing_item_responds_404() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/items/it_gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "no such document" })),
        )
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/items/it_gone")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_mark_responds_404() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/marks/mk_9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "no such document" })),
        )
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(json_request(
            Method::PUT,
            "/api/marks/mk_9",
            &json!({ "name": "Acme", "icon": "🏷" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_variant_price_is_rejected_before_the_store() {
    let server = MockServer::start().await;
    // No store mock mounted: the request must fail at the serde boundary.

    let response = app_for(&server)
        .oneshot(json_request(
            Method::POST,
            "/api/items",
            &json!({
                "name": "Screen",
                "cover_image": "st_1",
                "category_id": "cat_1",
                "mark_id": "mk_1",
                "variants": [{ "name": "Standard", "price": "-5" }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn upload_url_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/storage/upload_url"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "url": "https://files.example/upload/one-time" })),
        )
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/files/upload-url")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["url"], "https://files.example/upload/one-time");
}
