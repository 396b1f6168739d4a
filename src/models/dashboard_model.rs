use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub connection: Connection,
    pub data: DataSource,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Connection {
    pub ip: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataSource {
    /// CSV files merged in this order at startup.
    pub files: Vec<String>,
}
