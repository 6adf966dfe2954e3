//! Task record types as they travel on the wire.
//!
//! Field names follow the backing collection service: records carry their
//! identity as `_id`, the completion flag as `isChecked`, and an optional
//! client-local ordinal as `uniqueNo`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A store-assigned task identity.
///
/// Opaque to clients: the store mints it on create and clients only ever
/// echo it back. Never derived or invented client-side.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wrap a raw identity string received from the store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskId({})", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One task record, exactly as the store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identity.
    #[serde(rename = "_id")]
    pub id: TaskId,
    /// Display text.
    pub text: String,
    /// Completion flag.
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
    /// Client-local ordinal attached before the store assigned identity.
    /// A display aid only; the store never requires it.
    #[serde(rename = "uniqueNo", default, skip_serializing_if = "Option::is_none")]
    pub unique_no: Option<u32>,
}

/// Create payload: a task's fields before the store has assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Display text.
    pub text: String,
    /// Client-local ordinal (current count + 1).
    #[serde(rename = "uniqueNo")]
    pub unique_no: u32,
    /// Completion flag, false for a new task.
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
}

impl NewTask {
    /// Build a create payload for the given text and ordinal.
    pub fn new(text: impl Into<String>, unique_no: u32) -> Self {
        Self {
            text: text.into(),
            unique_no,
            is_checked: false,
        }
    }
}

/// Partial update payload. Only the fields present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement text, if editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Replacement completion flag, if toggling.
    #[serde(rename = "isChecked", skip_serializing_if = "Option::is_none")]
    pub is_checked: Option<bool>,
}

impl TaskPatch {
    /// Patch that replaces the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            is_checked: None,
        }
    }

    /// Patch that replaces the completion flag.
    pub fn completion(is_checked: bool) -> Self {
        Self {
            text: None,
            is_checked: Some(is_checked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_deserializes_store_record() {
        let json = r#"{"_id":"abc123","text":"buy milk","isChecked":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, TaskId::from("abc123"));
        assert_eq!(task.text, "buy milk");
        assert!(!task.is_checked);
        assert!(task.unique_no.is_none());
    }

    #[test]
    fn task_keeps_unique_no_when_present() {
        let json = r#"{"_id":"abc123","text":"buy milk","isChecked":true,"uniqueNo":3}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.unique_no, Some(3));
        assert!(task.is_checked);
    }

    #[test]
    fn new_task_serializes_wire_names() {
        let new = NewTask::new("walk dog", 2);
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["text"], "walk dog");
        assert_eq!(json["uniqueNo"], 2);
        assert_eq!(json["isChecked"], false);
    }

    #[test]
    fn completion_patch_omits_text() {
        let patch = TaskPatch::completion(true);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["isChecked"], true);
        assert!(json.get("text").is_none());
    }

    #[test]
    fn text_patch_omits_completion() {
        let patch = TaskPatch::text("buy oat milk");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["text"], "buy oat milk");
        assert!(json.get("isChecked").is_none());
    }

    #[test]
    fn task_id_is_transparent_in_json() {
        let id = TaskId::from("xyz");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""xyz""#);
    }
}
