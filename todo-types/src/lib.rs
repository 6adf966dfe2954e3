//! # todo-types
//!
//! Wire format types for the todo-sync collection store.
//!
//! This crate provides the foundational types used across all todo-sync
//! crates:
//! - [`TaskId`] - Store-assigned task identity
//! - [`Task`] - One task record as the store returns it
//! - [`NewTask`] - Create payload (no identity yet)
//! - [`TaskPatch`] - Partial update payload

#![warn(missing_docs)]
#![warn(clippy::all)]

mod task;

pub use task::{NewTask, Task, TaskId, TaskPatch};
