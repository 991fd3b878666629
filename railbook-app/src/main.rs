//! Terminal front-end for browsing trains and walking through a booking.

mod command;
mod render;
mod shell;

use anyhow::Context;
use railbook_client::{BookingSession, HttpReferenceApi};
use railbook_core::ReferenceDataSource;
use railbook_store::Config;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shell::Shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Screens go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "railbook=info,railbook_client=info,railbook_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(base_url = %config.client.base_url, "Using reference data API");

    let api = HttpReferenceApi::with_timeout(
        &config.client.base_url,
        Duration::from_secs(config.client.timeout_seconds),
    )
    .context("Failed to build HTTP client")?;
    let source: Arc<dyn ReferenceDataSource> = Arc::new(api);

    let session = BookingSession::new(source, config.booking.generator.build());
    let shell = Shell::new(session);

    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(())
}
