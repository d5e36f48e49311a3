//! # User Directory Node
//!
//! ## Startup Sequence
//!
//! 1. Initialize tracing (`RUST_LOG` overrides the default `info`)
//! 2. Load configuration from `UD_*` environment variables
//! 3. Validate and wire subsystems
//! 4. Serve HTTP until Ctrl+C

use anyhow::{anyhow, Context, Result};
use node_runtime::{load_config, UserDirectoryNode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    info!("===========================================");
    info!("  User Directory v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let config = load_config();
    let node = UserDirectoryNode::new(config).context("Failed to start user directory")?;

    node.run(shutdown_signal())
        .await
        .context("User directory terminated with an error")?;

    info!("Shutdown complete");
    Ok(())
}
