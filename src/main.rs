use anyhow::Context;
use axum::Router;
use tracing::{error, info, Level};

mod models;
mod routes;
mod state;
mod utils;

use crate::state::app_state::AppState;
use crate::utils::conf_helper::{get_cached_config, init_config_and_bind};
use taxi_charts::TripDataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // === CONFIG + LISTENER ===
    let listener = init_config_and_bind()
        .await
        .inspect_err(|e| error!("Startup failed: {:#}", e))?;

    let config = get_cached_config().context("config not initialized")?;

    // === DATASET ===
    // Loaded once; a missing or unreadable file stops startup before serving.
    let dataset = TripDataset::load(&config.data.files)
        .inspect_err(|e| error!("Dataset load failed: {}", e))
        .context("loading trip dataset")?;

    for source in dataset.sources() {
        info!("  {} rows from {}", source.rows, source.path);
    }

    let state = AppState::new(dataset);

    info!(
        "{} v{} serving on http://{}:{}",
        config.name, config.version, config.connection.ip, config.connection.port
    );

    let app = Router::new()
        .merge(routes::info_routes::health_routes())
        .merge(routes::chart_routes::dashboard_routes(state));

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
