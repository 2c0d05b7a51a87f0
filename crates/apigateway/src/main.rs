use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use catalog::catalog::Catalog;
use dotenv::dotenv;
use shared::{config::Config, utils::init_logger};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    init_logger("apigateway", config.dev_mode, config.enable_file_log);

    let catalog = Catalog::load(&config.catalog_path).with_context(|| {
        format!(
            "Failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;

    let state = AppState::new(Arc::new(catalog));

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
