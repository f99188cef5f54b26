//! `ao-tables` server binary.

use anyhow::Context;
use ao_tables::api::rest::{AppState, create_app};
use ao_tables::config::AppConfig;
use ao_tables::infrastructure::persistence::open_repository;
use ao_tables::telemetry;
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ao-tables", version, about = "CRUD REST API for AoTable records")]
struct Cli {
    /// Configuration file (defaults to `config/default.toml` if present).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    telemetry::init_tracing(&config.logging)?;

    let tables = open_repository(&config.database)
        .await
        .context("failed to open table store")?;
    let app = create_app(AppState::new(tables), &config.server.cors_origins);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "ao-tables listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("ao-tables stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
