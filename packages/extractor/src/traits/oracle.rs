//! Selector oracle trait.

use async_trait::async_trait;

use crate::error::OracleResult;
use crate::types::request::SelectorMapping;

/// An external capability that proposes CSS selectors for raw HTML.
///
/// Implementations wrap a specific model provider and handle prompting,
/// response parsing and their own timeout policy internally; a call must
/// always return rather than block indefinitely. The pipeline treats an
/// error and an empty mapping identically: no mapping provided, fall
/// through to heuristics.
#[async_trait]
pub trait SelectorOracle: Send + Sync {
    /// Propose a field → selector mapping for the given HTML.
    async fn infer_selectors(&self, html: &str) -> OracleResult<SelectorMapping>;

    /// Short provider name for logs.
    fn name(&self) -> &str;
}
