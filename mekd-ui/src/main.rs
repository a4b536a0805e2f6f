//! MEKD User Interface (mekd-ui) - Main entry point
//!
//! Serves the indicator entry form and the estimation API for the MEKD
//! (Model Estimasi Korupsi Daerah) regression tool.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use mekd_common::config::ServiceConfig;
use mekd_ui::{build_router, AppState};

/// Command-line arguments for mekd-ui
#[derive(Parser, Debug)]
#[command(name = "mekd-ui")]
#[command(about = "MEKD regional corruption / IPM estimation service")]
#[command(version)]
struct Args {
    /// Host address to bind
    #[arg(long, env = "MEKD_UI_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "MEKD_UI_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting MEKD UI (mekd-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let config = ServiceConfig::resolve(args.host, args.port)
        .context("Failed to resolve service configuration")?;

    let bind_addr = config.bind_addr();
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    info!("mekd-ui listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
