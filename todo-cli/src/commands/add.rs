//! Add a new task.

use anyhow::{Context, Result};
use std::path::Path;
use todo_client::ControllerError;

use super::open_controller;

/// Run the add command.
pub async fn run(data_dir: &Path, text: &str, use_mock: bool) -> Result<()> {
    let controller = open_controller(data_dir, use_mock).await?;

    // Fetch first so the client-local ordinal reflects the current count.
    controller
        .refresh()
        .await
        .context("Failed to fetch current list")?;

    controller.set_input(text).await;
    match controller.create().await {
        Ok(task) => {
            println!("Added [{}] {}", task.id, task.text);
            Ok(())
        }
        Err(ControllerError::EmptyInput) => anyhow::bail!("Enter valid text"),
        Err(e) => Err(e).context("Failed to add task"),
    }
}
