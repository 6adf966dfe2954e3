//! Ordered task list state and its reconciliation rules.
//!
//! The list holds records in server response order and is never re-sorted
//! locally. The derived count always equals the sequence length; it is
//! maintained here so no caller can drift the two apart.

use todo_types::{Task, TaskId};

/// Ordered sequence of task records plus the derived count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    count: usize,
}

impl TaskList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire sequence with the store's response.
    ///
    /// Full replace, not merge: after a successful refresh the local view
    /// is exactly what the store returned.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.count = tasks.len();
        self.tasks = tasks;
    }

    /// Append a store-confirmed record to the end of the sequence.
    pub fn push_confirmed(&mut self, task: Task) {
        self.tasks.push(task);
        self.count += 1;
    }

    /// Set the completion flag of the record with the given identity.
    ///
    /// Returns `true` if a record matched. No match is a no-op: the record
    /// may have been deleted by the time the confirmation arrived.
    pub fn set_completion(&mut self, id: &TaskId, is_checked: bool) -> bool {
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.is_checked = is_checked;
                true
            }
            None => false,
        }
    }

    /// Look up a record by identity.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// The records in server order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The derived count. Always equals `tasks().len()`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
