//! Configuration management for todo-cli.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Collection store configuration stored locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the collection store.
    pub server_url: String,
    /// When the store was configured.
    pub configured_at: u64,
}

impl StoreConfig {
    /// Create a new store configuration.
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            configured_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs(),
        }
    }

    /// Load store configuration from a directory.
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("store.json");
        let contents = tokio::fs::read_to_string(&path)
            .await
            .context("Store not configured. Run 'todo-cli init <url>' first.")?;
        serde_json::from_str(&contents).context("Invalid store configuration")
    }

    /// Save store configuration to a directory.
    pub async fn save(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join("store.json");
        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(&path, contents)
            .await
            .context("Failed to save store configuration")?;
        Ok(())
    }

    /// Check if a store is configured.
    pub async fn exists(data_dir: &Path) -> bool {
        data_dir.join("store.json").exists()
    }
}
