//! Refresh and print the task list.

use anyhow::Result;
use std::path::Path;
use todo_core::LoadStatus;

use super::{open_controller, print_tasks};

/// Run the list command.
pub async fn run(data_dir: &Path, use_mock: bool) -> Result<()> {
    let controller = open_controller(data_dir, use_mock).await?;

    if controller.refresh().await.is_err() {
        println!("Something went wrong reaching the store.");
    }

    match controller.status().await {
        LoadStatus::Success => print_tasks(&controller).await,
        LoadStatus::Failure => println!("Showing nothing: no successful refresh yet."),
        LoadStatus::Initial | LoadStatus::Loading => {}
    }

    Ok(())
}
