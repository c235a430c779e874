//! Server configuration, read from the environment once at startup.

use anyhow::Context;

/// Process configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`, default 8000)
    pub port: u16,

    /// SQLite database URL for the snapshot log (`SNAPSHOT_DB`); unset
    /// disables persistence
    pub snapshot_db: Option<String>,
}

impl ServerConfig {
    /// Load from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a number")?,
            Err(_) => 8000,
        };

        let snapshot_db = std::env::var("SNAPSHOT_DB")
            .ok()
            .filter(|value| !value.is_empty());

        Ok(Self { port, snapshot_db })
    }
}
