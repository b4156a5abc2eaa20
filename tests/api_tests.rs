use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use comicstream::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();

    let state = comicstream::api::create_app_state(config, None)
        .await
        .expect("Failed to create app state");
    comicstream::api::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_root_message() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Comic Stream API running"}));
}

#[tokio::test]
async fn test_create_then_list_series_applies_defaults() {
    let app = spawn_app().await;

    let (status, body) = post_json(&app, "/api/series", &json!({"title": "Test Show"})).await;
    assert_eq!(status, StatusCode::OK);

    let id = body["id"].as_str().expect("id should be a string").to_string();
    assert!(!id.is_empty());

    let (status, body) = get(&app, "/api/series?limit=1").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        body,
        json!({
            "items": [{
                "id": id,
                "title": "Test Show",
                "description": null,
                "cover_url": null,
                "banner_url": null,
                "genres": [],
                "rating": 0.0,
                "featured": false,
                "creator_ids": []
            }]
        })
    );
}

#[tokio::test]
async fn test_series_fields_are_stored_as_sent() {
    let app = spawn_app().await;

    let payload = json!({
        "title": "Full Series",
        "description": "Everything set",
        "cover_url": "https://example.com/c.jpg",
        "banner_url": "https://example.com/b.jpg",
        "genres": ["Mystery", "Horror"],
        "rating": 3.5,
        "featured": true,
        "creator_ids": ["4", "8"]
    });

    let (_, created) = post_json(&app, "/api/series", &payload).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = get(&app, &format!("/api/series/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = payload.clone();
    expected["id"] = json!(id);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_out_of_range_rating_is_rejected_without_write() {
    let app = spawn_app().await;

    for rating in [-1.0, 5.5] {
        let (status, body) = post_json(
            &app,
            "/api/series",
            &json!({"title": "Bad Rating", "rating": rating}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["field"], "rating");
    }

    let (_, body) = get(&app, "/api/series").await;
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_missing_title_is_a_validation_error() {
    let app = spawn_app().await;

    let (status, body) = post_json(&app, "/api/series", &json!({"rating": 2})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "body");
    assert!(
        body["detail"][0]["message"]
            .as_str()
            .unwrap()
            .contains("title")
    );
}

#[tokio::test]
async fn test_invalid_episode_numbers_are_rejected_without_write() {
    let app = spawn_app().await;

    let cases = [
        (json!({"series_id": "1", "title": "Zero", "episode_number": 0}), "episode_number"),
        (
            json!({"series_id": "1", "title": "No Season", "episode_number": 1, "season": 0}),
            "season",
        ),
        (
            json!({"series_id": "1", "title": "Rewind", "episode_number": 1, "duration_sec": -10}),
            "duration_sec",
        ),
    ];

    for (payload, field) in cases {
        let (status, body) = post_json(&app, "/api/episodes", &payload).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["field"], field);
    }

    let (_, body) = get(&app, "/api/series/1/episodes").await;
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_list_episodes_only_returns_matching_series() {
    let app = spawn_app().await;

    let episodes = [
        ("10", "A1", 1),
        ("20", "B1", 1),
        ("10", "A2", 2),
        ("100", "C1", 1),
        ("20", "B2", 2),
    ];

    for (series_id, title, number) in episodes {
        let (status, _) = post_json(
            &app,
            "/api/episodes",
            &json!({"series_id": series_id, "title": title, "episode_number": number}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = get(&app, "/api/series/10/episodes").await;
    assert_eq!(status, StatusCode::OK);

    let items = body["items"].as_array().unwrap();
    let titles: Vec<&str> = items.iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["A1", "A2"]);
    assert!(items.iter().all(|e| e["series_id"] == "10"));
    assert!(items.iter().all(|e| e["season"] == 1));

    let (_, body) = get(&app, "/api/series/20/episodes?limit=1").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["title"], "B1");
}

#[tokio::test]
async fn test_seed_twice_inserts_once() {
    let app = spawn_app().await;

    let (status, body) = post_json(&app, "/api/seed", &json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "ok", "inserted_series": 3, "inserted_episodes": 2})
    );

    let (status, body) = post_json(&app, "/api/seed", &json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "ok", "message": "Series already exist. Skipping seed."})
    );

    let (_, body) = get(&app, "/api/series").await;
    let series = body["items"].as_array().unwrap();
    assert_eq!(series.len(), 3);

    let first_id = series[0]["id"].as_str().unwrap();
    let (_, body) = get(&app, &format!("/api/series/{first_id}/episodes")).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["title"], "Pilot: Rise of the Shield");
}

#[tokio::test]
async fn test_unknown_series_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = get(&app, "/api/series/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/api/series/not-an-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("/api/nope"));
}

#[tokio::test]
async fn test_any_integer_limit_is_accepted() {
    let app = spawn_app().await;
    for title in ["One", "Two", "Three"] {
        post_json(&app, "/api/series", &json!({"title": title})).await;
    }

    let (status, body) = get(&app, "/api/series?limit=1001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);

    let (status, body) = get(&app, "/api/series?limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);

    let (status, body) = get(&app, "/api/series?limit=-2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let (status, body) = get(&app, "/api/series/1/episodes?limit=5000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_non_integer_limit_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/series?limit=abc").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["field"], "query");
}

#[tokio::test]
async fn test_creators_round_trip() {
    let app = spawn_app().await;

    let (status, created) = post_json(
        &app,
        "/api/creators",
        &json!({"name": "Ada Ink", "social": {"site": "https://ada.example"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/creators").await;
    assert_eq!(
        body["items"][0],
        json!({
            "id": created["id"],
            "name": "Ada Ink",
            "avatar_url": null,
            "bio": null,
            "social": {"site": "https://ada.example"}
        })
    );
}

#[tokio::test]
async fn test_diagnostics_with_live_database() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["creator", "episode", "series"]));
}

#[tokio::test]
async fn test_cors_allows_any_origin_with_credentials() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/series")
                .header("Origin", "https://comics.example")
                .header("Access-Control-Request-Method", "POST")
                .header("Access-Control-Request-Headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "https://comics.example"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-methods"], "POST");
}
