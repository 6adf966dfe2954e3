//! Mock store for testing.
//!
//! Acts as an in-memory backing collection: create assigns an identity,
//! list returns the current contents, update and delete mutate them.
//! Calls are recorded and failures can be injected for verification.

use super::{RemoteStore, StoreError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use todo_types::{NewTask, Task, TaskId, TaskPatch};

/// Mock store for testing.
///
/// Clones share state, so a test can keep one handle for setup and
/// verification while the controller owns another.
#[derive(Debug, Default)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

#[derive(Debug, Default)]
struct MockStoreInner {
    tasks: Vec<Task>,
    list_calls: usize,
    create_calls: Vec<NewTask>,
    update_calls: Vec<(TaskId, TaskPatch)>,
    delete_calls: Vec<TaskId>,
    fail_next_list: Option<String>,
    fail_next_create: Option<String>,
    fail_next_update: Option<String>,
    fail_next_delete: Option<String>,
}

impl MockStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store seeded with records.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let store = Self::new();
        store.inner.lock().unwrap().tasks = tasks;
        store
    }

    /// Snapshot of the backing collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.lock().unwrap().tasks.clone()
    }

    /// Number of list_all calls made.
    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }

    /// Create payloads received, in order.
    pub fn create_calls(&self) -> Vec<NewTask> {
        self.inner.lock().unwrap().create_calls.clone()
    }

    /// Update calls received, in order.
    pub fn update_calls(&self) -> Vec<(TaskId, TaskPatch)> {
        self.inner.lock().unwrap().update_calls.clone()
    }

    /// Delete calls received, in order.
    pub fn delete_calls(&self) -> Vec<TaskId> {
        self.inner.lock().unwrap().delete_calls.clone()
    }

    /// Cause the next list_all() to fail with the given error.
    pub fn fail_next_list(&self, error: &str) {
        self.inner.lock().unwrap().fail_next_list = Some(error.to_string());
    }

    /// Cause the next create() to fail with the given error.
    pub fn fail_next_create(&self, error: &str) {
        self.inner.lock().unwrap().fail_next_create = Some(error.to_string());
    }

    /// Cause the next update() to fail with the given error.
    pub fn fail_next_update(&self, error: &str) {
        self.inner.lock().unwrap().fail_next_update = Some(error.to_string());
    }

    /// Cause the next delete() to fail with the given error.
    pub fn fail_next_delete(&self, error: &str) {
        self.inner.lock().unwrap().fail_next_delete = Some(error.to_string());
    }
}

impl Clone for MockStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;

        if let Some(error) = inner.fail_next_list.take() {
            return Err(StoreError::Transport(error));
        }

        Ok(inner.tasks.clone())
    }

    async fn create(&self, task: &NewTask) -> Result<Task, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.create_calls.push(task.clone());

        if let Some(error) = inner.fail_next_create.take() {
            return Err(StoreError::Transport(error));
        }

        let created = Task {
            id: TaskId::new(uuid::Uuid::new_v4().to_string()),
            text: task.text.clone(),
            is_checked: task.is_checked,
            unique_no: Some(task.unique_no),
        };
        inner.tasks.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.update_calls.push((id.clone(), patch.clone()));

        if let Some(error) = inner.fail_next_update.take() {
            return Err(StoreError::Transport(error));
        }

        match inner.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                if let Some(text) = &patch.text {
                    task.text = text.clone();
                }
                if let Some(is_checked) = patch.is_checked {
                    task.is_checked = is_checked;
                }
                Ok(())
            }
            None => Err(StoreError::Rejected { status: 404 }),
        }
    }

    async fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.delete_calls.push(id.clone());

        if let Some(error) = inner.fail_next_delete.take() {
            return Err(StoreError::Transport(error));
        }

        let before = inner.tasks.len();
        inner.tasks.retain(|t| &t.id != id);
        if inner.tasks.len() == before {
            return Err(StoreError::Rejected { status: 404 });
        }
        Ok(())
    }
}
