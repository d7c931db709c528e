mod routes;

use anyhow::{Context, Result};
use duocal_core::config::{DuocalConfig, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Bind the configured address. Host names such as `localhost` are resolved.
async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    let host = server.host.as_str();
    TcpListener::bind((host, server.port))
        .await
        .with_context(|| format!("Could not bind {}:{}", host, server.port))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = DuocalConfig::load()?;

    let app = routes::app();

    let listener = bind(&config.server).await?;
    info!("duocal-server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
