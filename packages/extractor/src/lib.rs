//! Product Data Extraction Engine
//!
//! Turns raw product-page HTML into normalized structured records: title,
//! price (raw text, parsed amount, currency symbol), availability snippet,
//! and specification tables.
//!
//! # Pipeline
//!
//! Each extraction is an ordered, call-local sequence:
//!
//! 1. Fetch (optional) - retrying HTTP GET when the caller supplies a URL
//!    instead of inline HTML.
//! 2. Selector application - caller-supplied CSS selectors with soft
//!    per-field failure.
//! 3. Heuristic inference - ordered fallback chains for each field left
//!    empty.
//! 4. Normalization - currency/number mining and timestamping.
//!
//! An optional selector oracle ([`GeminiOracle`]) can propose a mapping for
//! markup that defeats the heuristics; any oracle failure degrades to the
//! heuristic path and is never fatal.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extractor::{ExtractionRequest, Extractor};
//!
//! let engine = Extractor::new();
//! let record = engine
//!     .extract(&ExtractionRequest::for_url("https://example.com/p/1"))
//!     .await?;
//! println!("{:?} {:?}", record.title, record.price.amount);
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - The [`Extractor`] engine
//! - [`fetcher`] - Retrying HTML fetcher
//! - [`selectors`] / [`heuristics`] / [`normalize`] - Pipeline stages
//! - [`traits`] - Oracle and snapshot-store seams
//! - [`oracle`] - Gemini oracle implementation
//! - [`stores`] - Snapshot sinks (memory, SQLite)
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod fetcher;
pub mod heuristics;
pub mod normalize;
pub mod oracle;
mod patterns;
pub mod pipeline;
pub mod security;
pub mod selectors;
pub mod stores;
pub mod testing;
mod text;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, FetchError, OracleError, Result};
pub use fetcher::{FetchedPage, Fetcher};
pub use oracle::GeminiOracle;
pub use pipeline::Extractor;
pub use security::SecretString;
pub use traits::oracle::SelectorOracle;
pub use traits::store::{Snapshot, SnapshotStore};
pub use types::config::{FetchConfig, OracleConfig, DEFAULT_ORACLE_MODELS, DEFAULT_USER_AGENT};
pub use types::record::{NormalizedRecord, Price, RawFieldSet};
pub use types::request::{ExtractionRequest, SelectorMapping};

// Re-export stores
pub use stores::MemorySnapshotStore;

#[cfg(feature = "sqlite")]
pub use stores::SqliteSnapshotStore;
