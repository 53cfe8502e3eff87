//! Self-Healing Network Pipeline - Main Entry Point

use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let settings = Settings::load()?;

    info!("=== Self-Healing NMS v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting decision pipeline on {}...", settings.bind_addr);

    run_server(settings).await?;

    Ok(())
}
