//! Snapshot persistence trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A persisted copy of fetched HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Auto-assigned identifier, increasing in append order
    pub id: i64,

    pub url: String,

    /// Host portion of the URL
    pub domain: String,

    pub fetched_at: DateTime<Utc>,

    pub html: String,
}

/// Append-only log of fetched HTML, keyed by URL/domain/time.
///
/// The engine never reads snapshots; callers append after a successful live
/// fetch so extractions stay reproducible.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Append one fetched page.
    async fn append(&self, url: &str, html: &str) -> Result<()>;

    /// Most recent snapshots, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<Snapshot>>;

    /// Number of stored snapshots.
    async fn count(&self) -> Result<usize>;
}

/// Host portion of a URL, empty when unparseable.
pub(crate) fn domain_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("https://shop.example.com/p/1?x=2"), "shop.example.com");
        assert_eq!(domain_of("not a url"), "");
    }
}
