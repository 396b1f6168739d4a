use anyhow::{Context, Result};
use std::sync::OnceLock;
use tokio::fs;
use tokio::net::TcpListener;
use tracing::info;

use crate::models::dashboard_model::DashboardConfig;

static CONFIG_CACHE: OnceLock<DashboardConfig> = OnceLock::new();

pub const CONFIG_ENV: &str = "TAXI_DASHBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "dashboard.json";

pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub async fn read_config(file_path: &str) -> Result<DashboardConfig> {
    let data = fs::read_to_string(file_path)
        .await
        .with_context(|| format!("reading config file {file_path}"))?;

    serde_json::from_str(&data).with_context(|| format!("parsing config file {file_path}"))
}

pub async fn init_config_and_bind() -> Result<TcpListener> {
    let file_path = config_path();
    let mut config = read_config(&file_path).await?;

    let bind_addr = format!("{}:{}", config.connection.ip, config.connection.port);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;

    // Port 0 asks the OS for a free port; record the one we got.
    config.connection.port = listener.local_addr().context("reading bound address")?.port();

    info!("Config loaded from {} (port {})", file_path, config.connection.port);

    CONFIG_CACHE
        .set(config)
        .map_err(|_| anyhow::anyhow!("config already initialized"))?;

    Ok(listener)
}

pub fn get_cached_config() -> Option<&'static DashboardConfig> {
    CONFIG_CACHE.get()
}
