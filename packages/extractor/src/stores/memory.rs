//! In-memory snapshot store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::traits::store::{domain_of, Snapshot, SnapshotStore};

/// Keeps snapshots in a `Vec` behind a lock.
///
/// The default sink for tests and for deployments that don't configure a
/// database.
#[derive(Default)]
pub struct MemorySnapshotStore {
    rows: RwLock<Vec<Snapshot>>,
}

impl MemorySnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn append(&self, url: &str, html: &str) -> Result<()> {
        let mut rows = self.rows.write().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(Snapshot {
            id,
            url: url.to_string(),
            domain: domain_of(url),
            fetched_at: Utc::now(),
            html: html.to_string(),
        });
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Snapshot>> {
        let rows = self.rows.read().unwrap();
        Ok(rows.iter().rev().take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.rows.read().unwrap().len())
    }
}
