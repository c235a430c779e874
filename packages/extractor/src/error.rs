//! Typed errors for the extraction engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Soft-failure paths (selector
//! misses, heuristic misses, numeric parse failures) are modeled as `Option`
//! values, not errors; only transport and storage problems surface here.

use thiserror::Error;

/// Errors that can occur during an extraction call.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Live fetch failed after exhausting its retry budget
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Request carried neither inline HTML nor a URL
    #[error("no HTML or URL provided")]
    NoInput,

    /// Snapshot storage failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Transport-level failures from the fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL did not parse
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Connection error or per-attempt timeout
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Retry budget exhausted; carries the last attempt's error
    #[error("{attempts} attempts failed for {url}: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

/// Failures from the selector oracle.
///
/// The pipeline degrades every one of these to an empty mapping; they are
/// never fatal to an extraction.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No API credential configured
    #[error("no API credential configured")]
    MissingCredential,

    /// HTTP request to the model provider failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model returned no text
    #[error("model returned an empty response")]
    EmptyResponse,

    /// Model output was not the requested JSON object
    #[error("unparseable model output: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Every candidate model failed; carries per-model messages
    #[error("all model attempts failed: {summary}")]
    Exhausted { summary: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for oracle calls.
pub type OracleResult<T> = std::result::Result<T, OracleError>;
