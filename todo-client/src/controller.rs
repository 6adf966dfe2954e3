//! SyncController - the main interface for todo-client.
//!
//! This module provides [`SyncController`], the component that owns the
//! task list state, drives calls against the remote collection store, and
//! reconciles local state with each settled response.
//!
//! # Architecture
//!
//! ```text
//! Presentation → SyncController → RemoteStore → Network
//!                     ↓
//!                todo-core (pure state machine)
//! ```
//!
//! Reconciliation is confirm-then-apply: no local mutation happens in the
//! call-issuing path, only once the store response settles. Delete and
//! edit-commit go one step further and re-fetch the whole list, so the
//! local view matches server truth exactly after either.
//!
//! # Example
//!
//! ```ignore
//! use todo_client::{MockStore, SyncController};
//!
//! let controller = SyncController::new(MockStore::new());
//! controller.refresh().await?;
//! controller.set_input("walk dog").await;
//! let created = controller.create().await?;
//! ```

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use todo_core::{EditSession, LoadStatus, RefreshEvent, RefreshTracker, TaskList};
use todo_types::{NewTask, Task, TaskId, TaskPatch};

use crate::store::{RemoteStore, StoreError};

/// Controller errors.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The pending input was empty or whitespace-only. Reported before any
    /// store call; the one validation failure surfaced directly to the user.
    #[error("task text must not be empty")]
    EmptyInput,

    /// The store call failed. Prior local state is untouched.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Everything the presentation layer needs on each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Task records in server order.
    pub tasks: Vec<Task>,
    /// Derived count, always equal to `tasks.len()`.
    pub count: usize,
    /// Refresh progress.
    pub status: LoadStatus,
    /// Active edit session: target identity and unsaved draft.
    pub editing: Option<(TaskId, String)>,
    /// Pending text for the not-yet-submitted new task.
    pub input: String,
}

/// All mutable controller state, behind one lock.
///
/// Single logical writer: mutation happens only in response-handling code,
/// never in the call-issuing path.
#[derive(Debug, Default)]
struct ControllerState {
    list: TaskList,
    status: LoadStatus,
    edit: Option<EditSession>,
    input: String,
    refreshes: RefreshTracker,
}

/// The synchronization controller.
///
/// Owns list contents, count, pending input, the active edit session, and
/// load status; issues store calls and applies the reconciliation rules
/// when they settle.
pub struct SyncController<S: RemoteStore> {
    store: S,
    state: Arc<Mutex<ControllerState>>,
}

impl<S: RemoteStore> SyncController<S> {
    /// Create a controller with an empty list and `Initial` status.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(ControllerState::default())),
        }
    }

    /// Fetch the full list and replace local contents with the response.
    ///
    /// Sets status to `Loading` for the duration of the call. On success
    /// the local sequence becomes exactly the store's response and status
    /// becomes `Success`. On failure the previous contents stay visible
    /// and status becomes `Failure`. Safe to re-invoke at any time; a
    /// response that settles after a newer refresh has already applied is
    /// discarded.
    pub async fn refresh(&self) -> Result<(), ControllerError> {
        let seq = {
            let mut state = self.state.lock().await;
            state.status = state.status.on_event(RefreshEvent::Started);
            state.refreshes.begin()
        };

        let result = self.store.list_all().await;

        let mut state = self.state.lock().await;
        if !state.refreshes.try_apply(seq) {
            tracing::debug!(seq = seq.value(), "discarding stale refresh response");
            return Ok(());
        }

        match result {
            Ok(tasks) => {
                state.list.replace_all(tasks);
                state.status = state.status.on_event(RefreshEvent::Succeeded);
                Ok(())
            }
            Err(e) => {
                state.status = state.status.on_event(RefreshEvent::Failed);
                tracing::warn!("refresh failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Replace the pending input for the next create.
    pub async fn set_input(&self, text: &str) {
        let mut state = self.state.lock().await;
        state.input = text.to_string();
    }

    /// Submit the pending input as a new task.
    ///
    /// Rejects empty or whitespace-only input synchronously, before any
    /// store call. On success the store-confirmed record (carrying its
    /// assigned identity) is appended and the pending input cleared. On
    /// failure list and input are left unchanged, so the user can retry.
    pub async fn create(&self) -> Result<Task, ControllerError> {
        let new_task = {
            let state = self.state.lock().await;
            if state.input.trim().is_empty() {
                return Err(ControllerError::EmptyInput);
            }
            NewTask::new(state.input.clone(), state.list.count() as u32 + 1)
        };

        match self.store.create(&new_task).await {
            Ok(task) => {
                let mut state = self.state.lock().await;
                state.list.push_confirmed(task.clone());
                state.input.clear();
                Ok(task)
            }
            Err(e) => {
                tracing::warn!("create failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Set one record's completion flag.
    ///
    /// The local flag changes only once the store confirms; on failure the
    /// record is exactly as before the call. A confirmation for an
    /// identity no longer in the list is a no-op.
    pub async fn set_completion(
        &self,
        id: &TaskId,
        is_checked: bool,
    ) -> Result<(), ControllerError> {
        match self.store.update(id, &TaskPatch::completion(is_checked)).await {
            Ok(()) => {
                let mut state = self.state.lock().await;
                if !state.list.set_completion(id, is_checked) {
                    tracing::debug!(%id, "completion confirmed for unknown task");
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%id, "completion update failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Delete one record.
    ///
    /// On success the whole list is re-fetched rather than spliced
    /// locally, trading one round trip for an exact match with server
    /// truth. On failure the list is untouched.
    pub async fn remove(&self, id: &TaskId) -> Result<(), ControllerError> {
        if let Err(e) = self.store.delete(id).await {
            tracing::warn!(%id, "delete failed: {e}");
            return Err(e.into());
        }
        self.refresh().await
    }

    /// Open an edit session for the given record.
    ///
    /// Precondition: any prior session's unsaved draft is discarded.
    /// Callers that want to keep a draft must commit or cancel first.
    pub async fn begin_edit(&self, id: &TaskId, current_text: &str) {
        let mut state = self.state.lock().await;
        if let Some(previous) = &state.edit {
            tracing::debug!(task = %previous.target(), "discarding unsaved draft");
        }
        state.edit = Some(EditSession::new(id.clone(), current_text));
    }

    /// Replace the active session's draft text. No-op without a session.
    pub async fn update_draft(&self, text: &str) {
        let mut state = self.state.lock().await;
        if let Some(session) = &mut state.edit {
            session.set_draft(text);
        }
    }

    /// Discard the active edit session without saving.
    pub async fn cancel_edit(&self) {
        let mut state = self.state.lock().await;
        state.edit = None;
    }

    /// Save the active session's draft to the store.
    ///
    /// No-op without a session. On success the session closes and the list
    /// is re-fetched (same rationale as [`remove`](Self::remove)). On
    /// failure the session stays open with its draft intact.
    pub async fn commit_edit(&self) -> Result<(), ControllerError> {
        let (target, draft) = {
            let state = self.state.lock().await;
            match &state.edit {
                Some(session) => (session.target().clone(), session.draft().to_string()),
                None => return Ok(()),
            }
        };

        match self.store.update(&target, &TaskPatch::text(draft)).await {
            Ok(()) => {
                {
                    let mut state = self.state.lock().await;
                    state.edit = None;
                }
                self.refresh().await
            }
            Err(e) => {
                tracing::warn!(task = %target, "edit commit failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Current state for the presentation layer.
    pub async fn snapshot(&self) -> Snapshot {
        let state = self.state.lock().await;
        Snapshot {
            tasks: state.list.tasks().to_vec(),
            count: state.list.count(),
            status: state.status,
            editing: state
                .edit
                .as_ref()
                .map(|s| (s.target().clone(), s.draft().to_string())),
            input: state.input.clone(),
        }
    }

    /// Current load status.
    pub async fn status(&self) -> LoadStatus {
        self.state.lock().await.status
    }

    /// Current task records in server order.
    pub async fn tasks(&self) -> Vec<Task> {
        self.state.lock().await.list.tasks().to_vec()
    }

    /// Current derived count.
    pub async fn count(&self) -> usize {
        self.state.lock().await.list.count()
    }

    /// Get a reference to the underlying store (for testing).
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    fn seeded_task(id: &str, text: &str, is_checked: bool) -> Task {
        Task {
            id: TaskId::from(id),
            text: text.to_string(),
            is_checked,
            unique_no: None,
        }
    }

    fn controller_with(tasks: Vec<Task>) -> (SyncController<MockStore>, MockStore) {
        let store = MockStore::with_tasks(tasks);
        (SyncController::new(store.clone()), store)
    }

    // ===========================================
    // Refresh Tests
    // ===========================================

    #[tokio::test]
    async fn starts_empty_and_initial() {
        let (controller, _) = controller_with(vec![]);

        let snapshot = controller.snapshot().await;
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.count, 0);
        assert_eq!(snapshot.status, LoadStatus::Initial);
        assert!(snapshot.editing.is_none());
        assert!(snapshot.input.is_empty());
    }

    #[tokio::test]
    async fn refresh_empty_store_succeeds() {
        let (controller, _) = controller_with(vec![]);

        controller.refresh().await.unwrap();

        assert_eq!(controller.status().await, LoadStatus::Success);
        assert!(controller.tasks().await.is_empty());
        assert_eq!(controller.count().await, 0);
    }

    #[tokio::test]
    async fn refresh_replaces_list_with_store_response() {
        let (controller, _) =
            controller_with(vec![seeded_task("1", "buy milk", false)]);

        controller.refresh().await.unwrap();

        let tasks = controller.tasks().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], seeded_task("1", "buy milk", false));
        assert_eq!(controller.count().await, 1);
        assert_eq!(controller.status().await, LoadStatus::Success);
    }

    #[tokio::test]
    async fn refresh_is_full_replace_not_merge() {
        let (controller, store) = controller_with(vec![
            seeded_task("1", "a", false),
            seeded_task("2", "b", true),
        ]);
        controller.refresh().await.unwrap();

        // Store contents change out from under the controller.
        store.delete(&TaskId::from("1")).await.unwrap();
        controller.refresh().await.unwrap();

        assert_eq!(controller.tasks().await, store.tasks());
        assert_eq!(controller.count().await, 1);
    }

    #[tokio::test]
    async fn refresh_failure_keeps_previous_contents() {
        let (controller, store) = controller_with(vec![
            seeded_task("1", "a", false),
            seeded_task("2", "b", false),
        ]);
        controller.refresh().await.unwrap();

        store.fail_next_list("store unreachable");
        let result = controller.refresh().await;

        assert!(matches!(
            result,
            Err(ControllerError::Store(StoreError::Transport(_)))
        ));
        assert_eq!(controller.status().await, LoadStatus::Failure);
        assert_eq!(controller.tasks().await.len(), 2);
        assert_eq!(controller.count().await, 2);
    }

    #[tokio::test]
    async fn refresh_recovers_after_failure() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);

        store.fail_next_list("down");
        assert!(controller.refresh().await.is_err());
        assert_eq!(controller.status().await, LoadStatus::Failure);

        controller.refresh().await.unwrap();
        assert_eq!(controller.status().await, LoadStatus::Success);
        assert_eq!(controller.count().await, 1);
    }

    #[tokio::test]
    async fn refresh_twice_is_idempotent() {
        let (controller, _) = controller_with(vec![
            seeded_task("1", "a", false),
            seeded_task("2", "b", true),
        ]);

        controller.refresh().await.unwrap();
        let first = controller.tasks().await;

        controller.refresh().await.unwrap();
        let second = controller.tasks().await;

        assert_eq!(first, second);
        assert_eq!(controller.status().await, LoadStatus::Success);
    }

    // ===========================================
    // Create Tests
    // ===========================================

    #[tokio::test]
    async fn create_empty_input_never_calls_store() {
        let (controller, store) = controller_with(vec![]);

        controller.set_input("").await;
        let result = controller.create().await;
        assert!(matches!(result, Err(ControllerError::EmptyInput)));

        controller.set_input("   ").await;
        let result = controller.create().await;
        assert!(matches!(result, Err(ControllerError::EmptyInput)));

        assert!(store.create_calls().is_empty());
        assert_eq!(controller.count().await, 0);
        assert_eq!(controller.status().await, LoadStatus::Initial);
    }

    #[tokio::test]
    async fn create_appends_confirmed_record_and_clears_input() {
        let (controller, _) = controller_with(vec![seeded_task("1", "buy milk", false)]);
        controller.refresh().await.unwrap();

        controller.set_input("walk dog").await;
        let created = controller.create().await.unwrap();

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.count, 2);
        assert_eq!(snapshot.tasks[0].id, TaskId::from("1"));
        assert_eq!(snapshot.tasks[1].id, created.id);
        assert_eq!(snapshot.tasks[1].text, "walk dog");
        assert!(!snapshot.tasks[1].is_checked);
        assert!(snapshot.input.is_empty());
    }

    #[tokio::test]
    async fn create_sends_client_local_sequence_number() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();

        controller.set_input("b").await;
        controller.create().await.unwrap();

        let sent = store.create_calls();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].unique_no, 2); // count + 1
        assert!(!sent[0].is_checked);
    }

    #[tokio::test]
    async fn create_failure_preserves_input_and_list() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();

        store.fail_next_create("network error");
        controller.set_input("walk dog").await;
        let result = controller.create().await;

        assert!(result.is_err());
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.input, "walk dog"); // retry keeps the text
        assert_eq!(snapshot.count, 1);

        // Retry succeeds with the preserved input.
        controller.create().await.unwrap();
        assert_eq!(controller.count().await, 2);
        assert!(controller.snapshot().await.input.is_empty());
    }

    // ===========================================
    // Completion Toggle Tests
    // ===========================================

    #[tokio::test]
    async fn set_completion_applies_after_confirmation() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();

        controller
            .set_completion(&TaskId::from("1"), true)
            .await
            .unwrap();

        assert!(controller.tasks().await[0].is_checked);
        assert!(store.tasks()[0].is_checked);
        assert_eq!(store.update_calls()[0].1, TaskPatch::completion(true));
    }

    #[tokio::test]
    async fn set_completion_failure_leaves_flag_unchanged() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();

        store.fail_next_update("network error");
        let result = controller.set_completion(&TaskId::from("1"), true).await;

        assert!(result.is_err());
        assert!(!controller.tasks().await[0].is_checked);
    }

    #[tokio::test]
    async fn set_completion_unknown_id_is_local_noop() {
        // The store knows a record the local list has not fetched yet.
        let (controller, _) = controller_with(vec![seeded_task("9", "late", false)]);

        controller
            .set_completion(&TaskId::from("9"), true)
            .await
            .unwrap();

        assert!(controller.tasks().await.is_empty());
        assert_eq!(controller.count().await, 0);
    }

    #[tokio::test]
    async fn crud_failures_do_not_touch_load_status() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();
        assert_eq!(controller.status().await, LoadStatus::Success);

        store.fail_next_update("down");
        let _ = controller.set_completion(&TaskId::from("1"), true).await;
        assert_eq!(controller.status().await, LoadStatus::Success);

        store.fail_next_create("down");
        controller.set_input("x").await;
        let _ = controller.create().await;
        assert_eq!(controller.status().await, LoadStatus::Success);
    }

    // ===========================================
    // Remove Tests
    // ===========================================

    #[tokio::test]
    async fn remove_refetches_instead_of_splicing() {
        let (controller, store) = controller_with(vec![
            seeded_task("1", "a", false),
            seeded_task("2", "b", false),
        ]);
        controller.refresh().await.unwrap();

        controller.remove(&TaskId::from("1")).await.unwrap();

        // One refresh on load, one after delete.
        assert_eq!(store.list_calls(), 2);
        let tasks = controller.tasks().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::from("2"));
        assert_eq!(controller.count().await, 1);
    }

    #[tokio::test]
    async fn remove_failure_leaves_list_untouched() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();

        store.fail_next_delete("network error");
        let result = controller.remove(&TaskId::from("1")).await;

        assert!(result.is_err());
        assert_eq!(controller.count().await, 1);
        assert_eq!(store.list_calls(), 1); // no re-fetch after a failed delete
    }

    // ===========================================
    // Edit Session Tests
    // ===========================================

    #[tokio::test]
    async fn edit_flow_commits_draft_and_refetches() {
        let (controller, store) = controller_with(vec![seeded_task("1", "buy milk", false)]);
        controller.refresh().await.unwrap();

        controller.begin_edit(&TaskId::from("1"), "buy milk").await;
        controller.update_draft("buy oat milk").await;
        controller.commit_edit().await.unwrap();

        let snapshot = controller.snapshot().await;
        assert!(snapshot.editing.is_none());
        assert_eq!(snapshot.tasks[0].text, "buy oat milk");
        assert_eq!(store.update_calls()[0].1, TaskPatch::text("buy oat milk"));
        assert_eq!(store.list_calls(), 2); // initial load + post-commit re-fetch
    }

    #[tokio::test]
    async fn commit_failure_keeps_session_and_draft() {
        let (controller, store) = controller_with(vec![seeded_task("1", "buy milk", false)]);
        controller.refresh().await.unwrap();

        controller.begin_edit(&TaskId::from("1"), "buy milk").await;
        controller.update_draft("buy oat milk").await;

        store.fail_next_update("network error");
        let result = controller.commit_edit().await;

        assert!(result.is_err());
        let snapshot = controller.snapshot().await;
        assert_eq!(
            snapshot.editing,
            Some((TaskId::from("1"), "buy oat milk".to_string()))
        );
        assert_eq!(snapshot.tasks[0].text, "buy milk");
    }

    #[tokio::test]
    async fn commit_without_session_is_noop() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();

        controller.commit_edit().await.unwrap();

        assert!(store.update_calls().is_empty());
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn update_draft_without_session_is_noop() {
        let (controller, _) = controller_with(vec![]);

        controller.update_draft("orphan draft").await;

        assert!(controller.snapshot().await.editing.is_none());
    }

    #[tokio::test]
    async fn begin_edit_overwrites_previous_session() {
        let (controller, _) = controller_with(vec![
            seeded_task("1", "a", false),
            seeded_task("2", "b", false),
        ]);
        controller.refresh().await.unwrap();

        controller.begin_edit(&TaskId::from("1"), "a").await;
        controller.update_draft("unsaved").await;
        controller.begin_edit(&TaskId::from("2"), "b").await;

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.editing, Some((TaskId::from("2"), "b".to_string())));
    }

    #[tokio::test]
    async fn cancel_edit_discards_session() {
        let (controller, store) = controller_with(vec![seeded_task("1", "a", false)]);
        controller.refresh().await.unwrap();

        controller.begin_edit(&TaskId::from("1"), "a").await;
        controller.cancel_edit().await;
        controller.commit_edit().await.unwrap();

        assert!(controller.snapshot().await.editing.is_none());
        assert!(store.update_calls().is_empty());
    }

    // ===========================================
    // Store Access Tests
    // ===========================================

    #[tokio::test]
    async fn store_accessible_for_testing() {
        let (controller, _) = controller_with(vec![]);
        assert_eq!(controller.store().list_calls(), 0);
    }
}
