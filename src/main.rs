use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wage_projection::api::{AppState, create_router};
use wage_projection::config::ConfigLoader;
use wage_projection::insights::InsightsClient;

#[derive(Debug, Parser)]
#[command(
    name = "wage-projection",
    about = "Compare cumulative earnings under two wage-raise proposals"
)]
struct Cli {
    /// Directory holding projection.yaml and schedules/.
    #[arg(short, long, default_value = "./config/projection")]
    config: PathBuf,
    /// Address the HTTP API listens on.
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    let insights = InsightsClient::from_env(loader.insights().clone())?;
    if !insights.has_api_key() {
        info!(
            api_key_env = %loader.insights().api_key_env,
            "No API key configured; /insights will return the fallback message"
        );
    }

    info!(
        name = %loader.config().name,
        anchor_date = %loader.config().anchor_date,
        "Loaded projection configuration"
    );

    let app = create_router(AppState::new(loader, insights));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("REST API listening on http://{}", cli.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
