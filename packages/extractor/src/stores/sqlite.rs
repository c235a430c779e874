//! SQLite snapshot store.
//!
//! A file-based append-only log. Good for:
//! - Local development
//! - Single-server deployments
//! - Reproducible re-extraction from stored snapshots

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use crate::error::{ExtractionError, Result};
use crate::traits::store::{domain_of, Snapshot, SnapshotStore};

/// SQLite-backed snapshot log.
pub struct SqliteSnapshotStore {
    pool: SqlitePool,
}

impl SqliteSnapshotStore {
    /// Open the snapshot database, creating the table on first use.
    ///
    /// # Example URLs
    /// - `sqlite::memory:` - In-memory database (ephemeral)
    /// - `sqlite://snapshots.db?mode=rwc` - Create if not exists
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::open(database_url, 5).await
    }

    /// Create an in-memory store (for testing).
    pub async fn in_memory() -> Result<Self> {
        // a single connection so every query sees the same memory database
        Self::open("sqlite::memory:", 1).await
    }

    async fn open(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| ExtractionError::Storage(e.to_string().into()))?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url TEXT,
                domain TEXT,
                fetched_at TEXT,
                html TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ExtractionError::Storage(e.to_string().into()))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_snapshots_domain ON snapshots(domain)")
            .execute(&self.pool)
            .await
            .map_err(|e| ExtractionError::Storage(e.to_string().into()))?;

        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(Debug, FromRow)]
struct SnapshotRow {
    id: i64,
    url: String,
    domain: String,
    fetched_at: String,
    html: String,
}

impl SnapshotRow {
    fn into_snapshot(self) -> Result<Snapshot> {
        let fetched_at = chrono::DateTime::parse_from_rfc3339(&self.fetched_at)
            .map_err(|e| ExtractionError::Storage(format!("invalid date: {}", e).into()))?
            .with_timezone(&Utc);

        Ok(Snapshot {
            id: self.id,
            url: self.url,
            domain: self.domain,
            fetched_at,
            html: self.html,
        })
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn append(&self, url: &str, html: &str) -> Result<()> {
        sqlx::query("INSERT INTO snapshots (url, domain, fetched_at, html) VALUES (?, ?, ?, ?)")
            .bind(url)
            .bind(domain_of(url))
            .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
            .bind(html)
            .execute(&self.pool)
            .await
            .map_err(|e| ExtractionError::Storage(e.to_string().into()))?;
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Snapshot>> {
        let rows: Vec<SnapshotRow> = sqlx::query_as(
            "SELECT id, url, domain, fetched_at, html FROM snapshots ORDER BY id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ExtractionError::Storage(e.to_string().into()))?;

        rows.into_iter().map(SnapshotRow::into_snapshot).collect()
    }

    async fn count(&self) -> Result<usize> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM snapshots")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ExtractionError::Storage(e.to_string().into()))?;
        Ok(row.0 as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_and_read_back() {
        let store = SqliteSnapshotStore::in_memory().await.unwrap();

        store
            .append("https://shop.example.com/p/1", "<html>one</html>")
            .await
            .unwrap();
        store
            .append("https://shop.example.com/p/2", "<html>two</html>")
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 2);

        let recent = store.recent(1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].url, "https://shop.example.com/p/2");
        assert_eq!(recent[0].domain, "shop.example.com");
        assert_eq!(recent[0].html, "<html>two</html>");
        assert!(recent[0].id > 0);
    }

    #[tokio::test]
    async fn test_table_creation_is_idempotent() {
        let store = SqliteSnapshotStore::in_memory().await.unwrap();
        store.run_migrations().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
