//! Shared helpers for roster-axum integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use roster_axum::bootstrap::{AxumContext, CorsConfig};
use roster_axum::routes::create_router;
use roster_db::TestDb;

/// Origin used by CORS-related tests.
#[allow(dead_code)]
pub const TEST_CORS_ORIGIN: &str = "http://localhost:3000";

/// A router over a freshly seeded store; keep the `TestDb` alive for the test.
pub async fn test_app(cors: &CorsConfig) -> (TestDb, Router) {
    let db = TestDb::new().await.expect("Failed to create test database");
    let app = create_router(AxumContext::new(db.config().clone()), cors);
    (db, app)
}

/// Send one request with an optional JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Send a request and decode the JSON response body.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
