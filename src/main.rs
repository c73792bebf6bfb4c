//! GrubDash server binary
//!
//! Reads the YAML config named by `GRUBDASH_CONFIG` (defaults apply when it
//! is unset), applies `PORT` / `GRUBDASH_HOST`, and serves until SIGTERM or
//! Ctrl+C.

use anyhow::Result;
use grubdash::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grubdash=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::var("GRUBDASH_CONFIG") {
        Ok(path) => {
            tracing::info!(path = %path, "loading configuration");
            AppConfig::from_yaml_file(&path)?
        }
        Err(_) => AppConfig::default(),
    }
    .with_env_overrides()?;

    ServerBuilder::new().with_config(config).serve().await
}
