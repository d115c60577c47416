//! Bluff client binary.
//!
//! Server frames arrive on stdin one JSON object per line, interleaved with
//! `/commands` typed by the player. Requests leave on stdout; the table is
//! drawn on stderr. Pipe stdin and stdout through any line-based connector
//! to reach a server.

use anyhow::Result;
use bluff_client::{Client, LineFrontend, logging};
use client_frontend_core::FrontendConfig;
use runtime::RuntimeConfig;
use tokio::io::{self, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();

    let _guard = logging::setup_logging(&runtime_config)?;

    tracing::info!("Starting bluff client");
    tracing::info!("Player: {}", runtime_config.player_id);

    let frontend = LineFrontend::new(
        frontend_config,
        BufReader::new(io::stdin()),
        io::stdout(),
        io::stderr(),
    );

    let client = Client::builder()
        .config(runtime_config)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
