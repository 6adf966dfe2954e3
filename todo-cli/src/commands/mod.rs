//! CLI command implementations.

pub mod add;
pub mod edit;
pub mod init;
pub mod list;
pub mod remove;
pub mod toggle;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use todo_client::{HttpStore, MockStore, RemoteStore, StoreError, SyncController};
use todo_types::{NewTask, Task, TaskId, TaskPatch};

use crate::config::StoreConfig;

/// Store selection for commands: the configured HTTP store or an
/// in-memory mock (for testing/demo, no server needed).
pub enum CliStore {
    /// Remote collection store from the saved configuration.
    Http(HttpStore),
    /// In-memory mock store.
    Mock(MockStore),
}

#[async_trait]
impl RemoteStore for CliStore {
    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        match self {
            Self::Http(store) => store.list_all().await,
            Self::Mock(store) => store.list_all().await,
        }
    }

    async fn create(&self, task: &NewTask) -> Result<Task, StoreError> {
        match self {
            Self::Http(store) => store.create(task).await,
            Self::Mock(store) => store.create(task).await,
        }
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), StoreError> {
        match self {
            Self::Http(store) => store.update(id, patch).await,
            Self::Mock(store) => store.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        match self {
            Self::Http(store) => store.delete(id).await,
            Self::Mock(store) => store.delete(id).await,
        }
    }
}

/// Build a controller over the configured store (or a mock).
pub async fn open_controller(
    data_dir: &Path,
    use_mock: bool,
) -> Result<SyncController<CliStore>> {
    let store = if use_mock {
        CliStore::Mock(MockStore::new())
    } else {
        let config = StoreConfig::load(data_dir).await?;
        CliStore::Http(HttpStore::new(config.server_url))
    };
    Ok(SyncController::new(store))
}

/// Print the current list the way `todo-cli list` renders it.
pub async fn print_tasks(controller: &SyncController<CliStore>) {
    let snapshot = controller.snapshot().await;
    for task in &snapshot.tasks {
        let mark = if task.is_checked { "x" } else { " " };
        println!("  [{}] {}  {}", mark, task.id, task.text);
    }
    println!("{} task(s)", snapshot.count);
}
