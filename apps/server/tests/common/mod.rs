//! Shared helpers for router-level integration tests.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response};
use tempfile::TempDir;
use tower::ServiceExt;

use spendfolio_server::api::app_router;
use spendfolio_server::build_state;
use spendfolio_server::config::{AuthConfig, Config};

/// Builds a router backed by a fresh database in a temp directory. The
/// TempDir guard must be held for the duration of the test.
pub async fn build_test_app() -> (axum::Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        static_dir: tmp.path().join("static").to_string_lossy().to_string(),
        auth: AuthConfig {
            secret_key: "integration-test-secret".to_string(),
            token_ttl_secs: 3600,
        },
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

pub async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a user and returns their access token.
pub async fn register(app: &axum::Router, username: &str, password: &str) -> String {
    let response = request(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let json = response_json(response).await;
    json["accessToken"].as_str().unwrap().to_string()
}
