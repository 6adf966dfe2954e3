//! # todo-client
//!
//! Synchronization controller for a remote todo collection store.
//!
//! This is the library that presentation layers use to keep a locally
//! rendered task list in step with the store.
//!
//! ## Features
//!
//! - **Store Abstraction**: Pluggable [`RemoteStore`] seam (HTTP, mock)
//! - **Pure State Machine**: Uses todo-core for side-effect-free logic
//! - **Confirm-Then-Apply Reconciliation**: local state never shows an
//!   unconfirmed mutation
//!
//! ## Example
//!
//! ```ignore
//! use todo_client::{HttpStore, SyncController};
//!
//! let store = HttpStore::new("https://todos.example.com");
//! let controller = SyncController::new(store);
//!
//! controller.refresh().await?;
//! controller.set_input("walk dog").await;
//! controller.create().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod store;

pub use controller::{ControllerError, Snapshot, SyncController};
pub use store::{HttpStore, MockStore, RemoteStore, StoreError};
