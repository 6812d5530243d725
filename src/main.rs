//! Campus API
//!
//! Read-only REST API over the university database: students, professors,
//! courses and their weekly schedules, enrollments, recruiters and placements.
//! Every endpoint runs one parameterized query and returns the rows as JSON.

mod config;
mod db;
mod error;
mod models;
mod routes;
mod state;

use crate::config::Settings;
use crate::db::PgExecutor;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🚀 Starting Campus API...");

    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    let pool = db::init_database_pool(&settings.database).await?;
    let state = Arc::new(AppState::new(Arc::new(PgExecutor::new(pool))));

    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    if settings.cors.allowed_origins.is_empty() {
        info!("   CORS: any origin");
    } else {
        info!("   CORS: {}", settings.cors.allowed_origins.join(", "));
    }
    info!("");
    info!("📚 API Endpoints:");
    info!("   GET  /api/students                              - List students");
    info!("   GET  /api/students/:id                          - Get student");
    info!("   GET  /api/students/:id/schedule                 - Timetable (?semester_id, ?day)");
    info!("   GET  /api/students/:id/enrollments              - Enrollments (?semester_id)");
    info!("   GET  /api/students/:id/placements               - Placement offers");
    info!("   GET  /api/professors                            - List professors");
    info!("   GET  /api/professors/:id                        - Get professor");
    info!("   GET  /api/professors/:id/courses                - Courses taught");
    info!("   GET  /api/professors/:id/schedule               - Timetable (?day)");
    info!("   GET  /api/professors/:id/courses/:cid/students  - Course roster");
    info!("   GET  /api/courses                               - List courses (?department)");
    info!("   GET  /api/courses/search                        - Search by name (?q)");
    info!("   GET  /api/courses/:id                           - Get course");
    info!("   GET  /api/courses/:id/schedule                  - Weekly slots (?semester_id)");
    info!("   GET  /api/recruiters                            - List recruiters");
    info!("   GET  /api/recruiters/:id                        - Get recruiter");
    info!("   GET  /api/recruiters/:id/placements             - Placements at company");
    info!("   GET  /api/chat                                  - Professor names");
    info!("");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,campus_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
