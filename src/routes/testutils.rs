//! Helpers to drive the full router in tests

use super::create_router;
use crate::config::{CorsConfig, Settings};
use crate::db::testutils::FakeExecutor;
use crate::state::AppState;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A fully buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body is not JSON ({}): {}", e, self.body))
    }
}

fn test_router(executor: Arc<FakeExecutor>) -> Router {
    let settings = Settings {
        cors: CorsConfig {
            allowed_origins: vec!["https://campus.example.com".to_string()],
        },
        ..Settings::default()
    };
    create_router(Arc::new(AppState::new(executor)), &settings)
}

async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Sends `GET uri` through a router backed by `executor`.
pub async fn get(executor: Arc<FakeExecutor>, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(test_router(executor), request).await
}

/// Sends a CORS preflight for `uri` from `origin`.
pub async fn options(uri: &str, origin: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    send(test_router(Arc::new(FakeExecutor::empty())), request).await
}
