//! Delete a task.

use anyhow::{Context, Result};
use std::path::Path;
use todo_types::TaskId;

use super::{open_controller, print_tasks};

/// Run the rm command.
pub async fn run(data_dir: &Path, id: &str, use_mock: bool) -> Result<()> {
    let controller = open_controller(data_dir, use_mock).await?;

    controller
        .refresh()
        .await
        .context("Failed to fetch current list")?;

    let id = TaskId::from(id);
    controller
        .remove(&id)
        .await
        .context("Failed to delete task")?;

    println!("Deleted {}", id);
    print_tasks(&controller).await;
    Ok(())
}
