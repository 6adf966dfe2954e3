//! # todo-core
//!
//! Pure logic for todo-sync (no I/O, instant tests).
//!
//! This crate implements the state machines and reconciliation rules of the
//! task list without any network I/O, enabling fast unit tests.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce
//! output without side effects. This enables:
//! - Instant unit tests (no mocks, no async)
//! - Deterministic behavior (same input → same output)
//! - Easy reasoning about state transitions
//!
//! The actual I/O (HTTP calls against the collection store) is performed by
//! `todo-client`, which applies these rules when responses settle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edit;
pub mod list;
pub mod refresh;
pub mod status;

pub use edit::EditSession;
pub use list::TaskList;
pub use refresh::{RefreshSeq, RefreshTracker};
pub use status::{LoadStatus, RefreshEvent};
