//! Shared helpers for HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use fleet_api::{AppState, config::ApiConfig};
use fleet_core::query::PageBounds;
use fleet_core::store::MemoryStore;
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";
pub const ADMIN_EMAIL: &str = "administrador@teste.com";
pub const ADMIN_PASSWORD: &str = "123456";

pub fn test_config(jwt_secret: &str) -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        pg_connection_url: String::new(),
        jwt_secret: jwt_secret.into(),
        page_bounds: PageBounds::PassThrough,
    }
}

/// Router over a seeded in-memory store, plus a handle on that store.
pub fn test_app() -> (Router, Arc<MemoryStore>) {
    test_app_with(test_config(SECRET))
}

pub fn test_app_with(config: ApiConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::seeded());
    let app = fleet_api::router(AppState::new(store.clone(), config));
    (app, store)
}

/// A response reduced to what the tests inspect.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("parse JSON")
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(request).await.expect("request");
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().expect("ascii location").to_string());
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec();
    TestResponse {
        status,
        location,
        body,
    }
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("build request")
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("build request")
}

/// Logs in as the seeded administrator and returns the bearer token.
pub async fn login_token(app: &Router) -> String {
    let resp = send(
        app,
        json_request(
            "POST",
            "/administrators/login",
            None,
            &serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK, "login failed");
    resp.json()["token"]
        .as_str()
        .expect("token is string")
        .to_string()
}
