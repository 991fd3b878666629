use std::net::SocketAddr;
use anyhow::Context;
use railbook_api::{app, AppState};
use railbook_store::{Config, TrainCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "railbook_api=debug,railbook_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Railbook API on port {}", config.server.port);

    let catalog = TrainCatalog::from_files(&config.catalog.stations_path, &config.catalog.trains_path)
        .context("Failed to load reference data")?;

    let app = app(AppState::new(catalog));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
