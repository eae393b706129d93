//! # Product Catalog Server
//!
//! 1. Parse the [`Cli`](product_catalog::cli::Cli) and load
//!    [`Settings`](product_catalog::settings::Settings).
//! 2. Install the tracing subscriber.
//! 3. Start the [`CatalogSystem`] (seeded product store).
//! 4. Serve the REST API until Ctrl-C, then shut the store down.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --addr 127.0.0.1:8080
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use product_catalog::cli::Cli;
use product_catalog::http::{create_router, AppState};
use product_catalog::lifecycle::{setup_tracing, CatalogSystem};
use product_catalog::settings::Settings;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    setup_tracing(&settings.logging).context("failed to initialise tracing")?;

    let addr = match cli.addr {
        Some(addr) => addr,
        None => settings.bind_addr()?,
    };

    let system = CatalogSystem::with_capacity(settings.server.channel_capacity);
    let app = create_router(
        AppState::new(system.product_client.clone()),
        &settings.cors,
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Product catalog API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
