//! Edit-session state: which record is being text-edited and its draft.
//!
//! At most one session exists at a time. Starting a new session replaces
//! any prior one, discarding its unsaved draft; callers that want to keep
//! a draft must commit or cancel first.

use todo_types::TaskId;

/// One in-progress text edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    target: TaskId,
    draft: String,
}

impl EditSession {
    /// Open a session for the given record, seeding the draft with its
    /// current text.
    pub fn new(target: TaskId, current_text: impl Into<String>) -> Self {
        Self {
            target,
            draft: current_text.into(),
        }
    }

    /// The identity of the record being edited.
    pub fn target(&self) -> &TaskId {
        &self.target
    }

    /// The unsaved draft text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }
}
