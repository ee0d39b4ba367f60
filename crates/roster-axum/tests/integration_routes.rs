//! Integration tests for the Axum web server.
//!
//! These tests drive the router end to end against a seeded temp-file store.

mod common;

use axum::http::{Method, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use common::{send, send_json, test_app};
use roster_axum::bootstrap::CorsConfig;

fn sample_body() -> serde_json::Value {
    json!({
        "name": "A",
        "city": "B",
        "country": "C",
        "location": { "lat": 1.0, "lng": 2.0 }
    })
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn list_returns_seed_rows_with_nested_location() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, body) = send_json(&app, Method::GET, "/api/classmates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "曹雅云", "city": "北京", "country": "中国",
              "location": { "lat": 39.9042, "lng": 116.4074 } },
            { "id": 49, "name": "周一琦", "city": "深圳", "country": "中国",
              "location": { "lat": 22.5431, "lng": 114.0579 } }
        ])
    );
}

#[tokio::test]
async fn get_unknown_id_is_404_with_error_body() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, body) = send_json(&app, Method::GET, "/api/classmates/777", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_returns_201_and_round_trips() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, created) =
        send_json(&app, Method::POST, "/api/classmates", Some(sample_body())).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    assert!(id > 0 && id != 1 && id != 49);

    let (status, fetched) =
        send_json(&app, Method::GET, &format!("/api/classmates/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut expected = sample_body();
    expected["id"] = json!(id);
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn create_without_location_key_is_400() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/classmates",
        Some(json!({ "name": "A", "city": "B", "country": "C", "location": { "lat": 1.0 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, list) = send_json(&app, Method::GET, "/api/classmates", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method(Method::POST)
                .uri("/api/classmates")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_is_idempotent_and_checks_existence() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, first) =
        send_json(&app, Method::PUT, "/api/classmates/49", Some(sample_body())).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) =
        send_json(&app, Method::PUT, "/api/classmates/49", Some(sample_body())).await;
    assert_eq!(first, second);
    assert_eq!(second["id"], 49);

    let (status, _) =
        send_json(&app, Method::PUT, "/api/classmates/5000", Some(sample_body())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/api/classmates/49",
        Some(json!({ "name": "only name" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, body) = send_json(&app, Method::DELETE, "/api/classmates/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = send_json(&app, Method::GET, "/api/classmates/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, Method::DELETE, "/api/classmates/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn batch_updates_and_creates() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, summary) = send_json(
        &app,
        Method::POST,
        "/api/classmates/batch",
        Some(json!([
            { "id": 1, "name": "曹雅云", "city": "广州", "country": "中国",
              "location": { "lat": 23.1291, "lng": 113.2644 } },
            { "id": 300, "name": "New", "city": "Tokyo", "country": "Japan",
              "lat": 35.6762, "lng": 139.6503 }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        summary,
        json!({ "updated": 1, "created": 1, "errors": 0, "error_details": [] })
    );

    let (_, updated) = send_json(&app, Method::GET, "/api/classmates/1", None).await;
    assert_eq!(updated["city"], "广州");
    let (status, created) = send_json(&app, Method::GET, "/api/classmates/300", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["location"], json!({ "lat": 35.6762, "lng": 139.6503 }));
}

#[tokio::test]
async fn batch_collects_invalid_entries_and_keeps_going() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, summary) = send_json(
        &app,
        Method::POST,
        "/api/classmates/batch",
        Some(json!([
            { "id": 400, "name": "A", "city": "X", "country": "C", "lat": 1.0, "lng": 2.0 },
            { "id": 401, "name": "B", "country": "C", "lat": 1.0, "lng": 2.0 },
            { "id": 402, "name": "D", "city": "Y", "country": "C", "lat": 1.0, "lng": 2.0 }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        summary["updated"].as_u64().unwrap() + summary["created"].as_u64().unwrap(),
        2
    );
    assert_eq!(summary["errors"], 1);
    assert_eq!(summary["error_details"].as_array().unwrap().len(), 1);

    let (_, list) = send_json(&app, Method::GET, "/api/classmates", None).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn batch_with_non_array_body_is_400() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/classmates/batch",
        Some(json!({ "id": 1, "name": "A" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn statistics_on_seed_rows() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, stats) = send_json(&app, Method::GET, "/api/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["country_stats"], json!({ "中国": 2 }));
    assert_eq!(stats["city_stats"], json!({ "北京": 1, "深圳": 1 }));
    assert_eq!(stats["total"], 2);
}

#[tokio::test]
async fn api_routes_not_intercepted_by_spa_fallback() {
    use roster_axum::bootstrap::AxumContext;
    use roster_axum::routes::create_spa_router;
    use roster_db::TestDb;
    use tempfile::TempDir;

    let db = TestDb::new().await.unwrap();
    let static_dir = TempDir::new().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!DOCTYPE html><html><body>SPA</body></html>",
    )
    .unwrap();

    let app = create_spa_router(
        AxumContext::new(db.config().clone()),
        static_dir.path(),
        &CorsConfig::AllowAll,
    );

    let (status, stats) = send_json(&app, Method::GET, "/api/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 2);

    let response = send(&app, Method::GET, "/some/client/route", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(std::str::from_utf8(&body).unwrap().contains("SPA"));
}

#[tokio::test]
async fn non_integer_id_is_404_with_error_body() {
    let (_db, app) = test_app(&CorsConfig::AllowAll).await;

    let (status, body) = send_json(&app, Method::GET, "/api/classmates/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, body) = send_json(&app, Method::DELETE, "/api/classmates/1.5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, body) =
        send_json(&app, Method::PUT, "/api/classmates/x1", Some(sample_body())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (_, list) = send_json(&app, Method::GET, "/api/classmates", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}
