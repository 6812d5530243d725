//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod chat;
mod courses;
mod professors;
mod recruiters;
mod students;
#[cfg(test)]
mod testutils;

use crate::config::Settings;
use crate::error::AppError;
use crate::models::HealthResponse;
use crate::state::SharedState;
use axum::{
    extract::{FromRequestParts, State},
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{warn, Level};

/// Path parameters; malformed values become a 400 with a JSON body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query-string parameters; malformed values become a 400 with a JSON body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/students", students::router())
        .nest("/api/professors", professors::router())
        .nest("/api/courses", courses::router())
        .nest("/api/recruiters", recruiters::router())
        .nest("/api/chat", chat::router())
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

/// Liveness message
async fn root() -> &'static str {
    "✅ Campus API is live and responding!"
}

/// Health check endpoint; also checks the database
async fn health_check(State(state): State<SharedState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, health, database) = match state.executor.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "connected"),
        Err(e) => {
            warn!("Health check could not reach the database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: health,
            database,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::testutils::{get, options};
    use crate::db::testutils::FakeExecutor;
    use axum::http::{header, StatusCode};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_root_is_alive() {
        let response = get(Arc::new(FakeExecutor::empty()), "/").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("live"));
    }

    #[tokio::test]
    async fn test_health_reports_database() {
        let response = get(Arc::new(FakeExecutor::empty()), "/health").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()["database"], "connected");

        let response = get(Arc::new(FakeExecutor::failing()), "/health").await;
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json()["status"], "degraded");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let executor = Arc::new(FakeExecutor::empty());
        let response = get(executor.clone(), "/api/teachers").await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(executor.queries().is_empty());
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let response = get(Arc::new(FakeExecutor::empty()), "/").await;
        assert!(response.headers.contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = options("/api/students", "https://campus.example.com").await;
        assert_eq!(
            response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://campus.example.com"
        );
    }
}
