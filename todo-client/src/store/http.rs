//! HTTP implementation of the remote collection store.
//!
//! Speaks the collection endpoint's REST surface:
//! `GET/POST {base}/api/todos` and `PUT/DELETE {base}/api/todos/{id}`.

use super::{RemoteStore, StoreError};
use async_trait::async_trait;
use todo_types::{NewTask, Task, TaskId, TaskPatch};

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::InvalidBody(e.to_string())
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

/// HTTP client for the collection store.
#[derive(Debug, Clone)]
pub struct HttpStore {
    base_url: String,
    http: reqwest::Client,
}

impl HttpStore {
    /// Create a store client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for the collection endpoint.
    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    /// Build the URL for a specific record.
    fn todo_url(&self, id: &TaskId) -> String {
        format!("{}/api/todos/{}", self.base_url, id)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(StoreError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn list_all(&self) -> Result<Vec<Task>, StoreError> {
        let response = self.http.get(self.todos_url()).send().await?;
        Self::check_status(&response)?;
        Ok(response.json().await?)
    }

    async fn create(&self, task: &NewTask) -> Result<Task, StoreError> {
        let response = self.http.post(self.todos_url()).json(task).send().await?;
        Self::check_status(&response)?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), StoreError> {
        let response = self.http.put(self.todo_url(id)).json(patch).send().await?;
        // Body ignored beyond success/failure.
        Self::check_status(&response)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        let response = self.http.delete(self.todo_url(id)).send().await?;
        Self::check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url() {
        let store = HttpStore::new("https://todos.example.com");
        assert_eq!(store.todos_url(), "https://todos.example.com/api/todos");
    }

    #[test]
    fn record_url() {
        let store = HttpStore::new("https://todos.example.com");
        assert_eq!(
            store.todo_url(&TaskId::from("abc123")),
            "https://todos.example.com/api/todos/abc123"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let store = HttpStore::new("https://todos.example.com/");
        assert_eq!(store.base_url(), "https://todos.example.com");
        assert_eq!(store.todos_url(), "https://todos.example.com/api/todos");
    }
}
