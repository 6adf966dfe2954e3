//! Set a task's completion flag.

use anyhow::{Context, Result};
use std::path::Path;
use todo_types::TaskId;

use super::open_controller;

/// Run the done/undone command.
pub async fn run(data_dir: &Path, id: &str, is_checked: bool, use_mock: bool) -> Result<()> {
    let controller = open_controller(data_dir, use_mock).await?;

    controller
        .refresh()
        .await
        .context("Failed to fetch current list")?;

    let id = TaskId::from(id);
    controller
        .set_completion(&id, is_checked)
        .await
        .context("Failed to update task")?;

    println!(
        "Marked {} {}",
        id,
        if is_checked { "complete" } else { "not complete" }
    );
    Ok(())
}
