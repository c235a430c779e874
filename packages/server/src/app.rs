//! Application state and router assembly.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use extractor::{Extractor, SnapshotStore};

use crate::routes::{extract_handler, health_handler};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
    pub snapshots: Option<Arc<dyn SnapshotStore>>,
}

/// Build the router with request tracing enabled.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/extract", post(extract_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
