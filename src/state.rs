//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::db::QueryExecutor;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Runs every query the routers build
    pub executor: Arc<dyn QueryExecutor>,
}

impl AppState {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
