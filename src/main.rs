//! Album directory server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use album_directory::api::{create_router, AppState};
use album_directory::config::{AppConfig, LogFormat};
use album_directory::directory::AlbumDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let directory = build_directory(&config).await;
    let router = create_router(AppState::new(directory));

    // Start server
    let addr = config.listen_addr().context("invalid server configuration")?;
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

async fn build_directory(config: &AppConfig) -> Arc<AlbumDirectory> {
    let directory = if config.directory.seed {
        AlbumDirectory::seeded()
    } else {
        AlbumDirectory::new()
    };

    tracing::info!(albums = directory.len().await, "Album directory initialised");
    Arc::new(directory)
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("album_directory=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("failed to install tracing subscriber")?;
        }
        LogFormat::Text => {
            registry
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .context("failed to install tracing subscriber")?;
        }
    }

    Ok(())
}
