// Main entry point for the extraction API server

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use extractor::{Extractor, GeminiOracle, OracleConfig, SnapshotStore, SqliteSnapshotStore};

mod app;
mod config;
mod routes;

use app::{build_app, AppState};
use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; a missing file is fine
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,extractor=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting product extraction API");

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Configuration loaded");

    let mut engine = Extractor::new();
    match OracleConfig::from_env() {
        Ok(oracle_config) => {
            tracing::info!("Gemini selector oracle enabled");
            engine = engine.with_oracle(Arc::new(GeminiOracle::new(oracle_config)));
        }
        Err(_) => {
            tracing::info!("GEMINI_API_KEY not set; selector inference disabled");
        }
    }

    let snapshots: Option<Arc<dyn SnapshotStore>> = match &config.snapshot_db {
        Some(db_url) => {
            let store = SqliteSnapshotStore::new(db_url)
                .await
                .context("Failed to open snapshot database")?;
            tracing::info!(db = %db_url, "Snapshot log opened");
            Some(Arc::new(store))
        }
        None => {
            tracing::info!("SNAPSHOT_DB not set; snapshots disabled");
            None
        }
    };

    let app = build_app(AppState {
        extractor: Arc::new(engine),
        snapshots,
    });

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Extraction endpoint: http://localhost:{}/extract", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
