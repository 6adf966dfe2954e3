//! Store abstraction for todo-client.
//!
//! This module provides a pluggable seam over the remote collection store
//! (HTTP for production, mock for testing).
//!
//! # Design
//!
//! The store trait mirrors the collection endpoint's four operations:
//! - `list_all()` fetches every record in server order
//! - `create()` submits a record's fields and returns it with identity
//! - `update()` changes a subset of one record's fields
//! - `delete()` removes one record
//!
//! # Example
//!
//! ```ignore
//! let store = HttpStore::new("https://todos.example.com");
//! let tasks = store.list_all().await?;
//! ```

mod http;
mod mock;

pub use http::HttpStore;
pub use mock::MockStore;

use async_trait::async_trait;
use thiserror::Error;
use todo_types::{NewTask, Task, TaskId, TaskPatch};

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The connection could not complete.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but indicated failure.
    #[error("store rejected request with status {status}")]
    Rejected {
        /// HTTP status code from the store.
        status: u16,
    },

    /// A success response carried a body this client could not decode.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

/// Remote collection store holding task records.
///
/// Implementations handle the underlying request/response mechanism
/// (HTTP, mock, etc). Responses beyond success/failure are ignored for
/// `update` and `delete`.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch every record, in server order.
    async fn list_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Create a record from the given fields.
    ///
    /// The success response carries the record including its
    /// store-assigned identity.
    async fn create(&self, task: &NewTask) -> Result<Task, StoreError>;

    /// Change a subset of one record's fields.
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), StoreError>;

    /// Remove one record.
    async fn delete(&self, id: &TaskId) -> Result<(), StoreError>;
}
