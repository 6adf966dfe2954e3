//! Point the CLI at a collection store.

use anyhow::Result;
use std::path::Path;

use crate::config::StoreConfig;

/// Run the init command.
pub async fn run(data_dir: &Path, url: &str) -> Result<()> {
    let config = StoreConfig::new(url);
    config.save(data_dir).await?;

    println!("Store configured: {}", config.server_url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn init_writes_config() {
        let dir = tempdir().unwrap();

        run(dir.path(), "https://todos.example.com").await.unwrap();

        let config = StoreConfig::load(dir.path()).await.unwrap();
        assert_eq!(config.server_url, "https://todos.example.com");
    }

    #[tokio::test]
    async fn init_overwrites_previous_config() {
        let dir = tempdir().unwrap();

        run(dir.path(), "https://old.example.com").await.unwrap();
        run(dir.path(), "https://new.example.com").await.unwrap();

        let config = StoreConfig::load(dir.path()).await.unwrap();
        assert_eq!(config.server_url, "https://new.example.com");
    }
}
