use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use hilo_store::SqliteStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Observability
    hilo_api::obs::init("hilo-api");

    // Config
    let cfg = hilo_config::AppConfig::load().unwrap_or_default();
    let http_bind = cfg.http_bind();
    let db_path = cfg.database_path();

    // Open the dataset read-only and verify the connection
    let store = SqliteStore::open(&db_path)
        .await
        .with_context(|| format!("failed to open dataset at {db_path}"))?;
    store.ping().await.context("database ping failed")?;
    tracing::info!(%db_path, "dataset opened");

    // Build app and state
    let (app, state) = hilo_api::build_app(Arc::new(store));

    // Start HTTP server
    let addr: SocketAddr = http_bind.parse().context("invalid HTTP bind address")?;
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind TCP listener")?;

    // Mark ready just before serving
    hilo_api::set_ready(&state, true);

    tracing::info!(%addr, "HTTP server listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
