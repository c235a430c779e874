//! The extraction endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use extractor::{ExtractionRequest, NormalizedRecord, SnapshotStore};

use crate::app::AppState;

/// Boundary response: ok-with-data or a single error message.
///
/// Failures keep HTTP 200 with the discriminant in the body; there is no
/// partial-success shape and no stack traces.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExtractResponse {
    Ok { data: Box<NormalizedRecord> },
    Error { message: String },
}

/// `POST /extract`
pub async fn extract_handler(
    State(state): State<AppState>,
    Json(request): Json<ExtractionRequest>,
) -> Json<ExtractResponse> {
    Json(run_extraction(&state, request).await)
}

async fn run_extraction(state: &AppState, request: ExtractionRequest) -> ExtractResponse {
    // Inline HTML wins over a URL; fetch only when HTML is missing.
    let (html, fetched_from) = match (request.html.clone(), request.url.clone()) {
        (Some(html), _) => (html, None),
        (None, Some(url)) => match state.extractor.fetch(&url).await {
            Ok(page) => {
                info!(url = %url, final_url = %page.final_url, bytes = page.html.len(), "page fetched");
                (page.html, Some(url))
            }
            Err(e) => {
                return ExtractResponse::Error {
                    message: e.to_string(),
                }
            }
        },
        (None, None) => {
            return ExtractResponse::Error {
                message: "No HTML or URL provided".to_string(),
            }
        }
    };

    // Snapshot only pages that came from a live fetch; a sink failure never
    // fails the extraction.
    if let (Some(url), Some(snapshots)) = (&fetched_from, &state.snapshots) {
        if let Err(e) = snapshots.append(url, &html).await {
            warn!(url = %url, error = %e, "snapshot append failed");
        }
    }

    let mapping = if request.mapping.is_empty() && request.use_ai_inference {
        state.extractor.infer_mapping(&html).await
    } else {
        request.mapping.clone()
    };

    let record = state.extractor.extract_html(&html, &mapping);
    ExtractResponse::Ok {
        data: Box::new(record),
    }
}
