//! Behaviour of the HTTP surface when storage initialization is switched off.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use comicstream::config::Config;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn spawn_app_without_storage() -> Router {
    let mut config = Config::default();
    config.database.enabled = false;

    let state = comicstream::api::create_app_state(config, None)
        .await
        .expect("app state without storage");
    assert!(state.store().is_none());

    comicstream::api::router(state)
}

async fn request(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn diagnostics_still_answer_200() {
    let app = spawn_app_without_storage().await;

    let (status, body) = request(&app, "GET", "/test").await;

    assert_eq!(status, StatusCode::OK);
    for field in [
        "backend",
        "database",
        "database_url",
        "database_name",
        "connection_status",
    ] {
        assert!(body[field].is_string(), "{field} should be a string");
    }
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], Value::Array(vec![]));
}

#[tokio::test]
async fn catalog_routes_report_unavailable_storage() {
    let app = spawn_app_without_storage().await;

    let (status, body) = request(&app, "GET", "/api/series").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["detail"].is_string());

    let (status, _) = request(&app, "POST", "/api/seed").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn root_is_unaffected() {
    let app = spawn_app_without_storage().await;

    let (status, body) = request(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comic Stream API running");
}
