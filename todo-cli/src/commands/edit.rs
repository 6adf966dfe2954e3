//! Replace a task's text.

use anyhow::{Context, Result};
use std::path::Path;
use todo_types::TaskId;

use super::open_controller;

/// Run the edit command.
///
/// One-shot equivalent of the interactive flow: open a session seeded with
/// the task's current text, replace the draft, and commit.
pub async fn run(data_dir: &Path, id: &str, text: &str, use_mock: bool) -> Result<()> {
    let controller = open_controller(data_dir, use_mock).await?;

    controller
        .refresh()
        .await
        .context("Failed to fetch current list")?;

    let id = TaskId::from(id);
    let current_text = controller
        .snapshot()
        .await
        .tasks
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.text.clone())
        .ok_or_else(|| anyhow::anyhow!("No task with id {}", id))?;

    controller.begin_edit(&id, &current_text).await;
    controller.update_draft(text).await;
    controller
        .commit_edit()
        .await
        .context("Failed to save edit")?;

    println!("Updated [{}] {}", id, text);
    Ok(())
}
