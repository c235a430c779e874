//! Liveness probe.

use axum::extract::State;
use axum::Json;
use extractor::SnapshotStore;
use serde::Serialize;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    snapshots: String,
}

/// Health check endpoint.
///
/// Reports snapshot-store connectivity alongside process liveness.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshots = match &state.snapshots {
        Some(store) => match store.count().await {
            Ok(_) => "ok".to_string(),
            Err(e) => format!("error: {e}"),
        },
        None => "disabled".to_string(),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        snapshots,
    })
}
