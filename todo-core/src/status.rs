//! Load-status state machine for the task list.
//!
//! This module provides a pure, side-effect-free state machine describing
//! refresh progress. Only the refresh operation drives it; create, toggle,
//! delete, and edit never touch it. The actual fetch is performed by
//! todo-client, which feeds settled responses back in as events.

/// Load status of the task list - NO I/O, just state transitions.
///
/// The only legal path is
/// `Initial|Success|Failure → Loading → Success|Failure`; nothing leaves
/// `Loading` except a settled store response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No refresh has been attempted yet.
    Initial,
    /// A refresh is in flight.
    Loading,
    /// The last refresh settled successfully.
    Success,
    /// The last refresh failed; previous list contents are still shown.
    Failure,
}

impl LoadStatus {
    /// Create a new state machine in the Initial state.
    pub fn new() -> Self {
        Self::Initial
    }

    /// Process a refresh event and return the new status.
    ///
    /// This is a pure function - no side effects. Events that are invalid
    /// for the current state (a settled response while nothing is in
    /// flight, a start while already loading) leave the status unchanged.
    pub fn on_event(self, event: RefreshEvent) -> Self {
        match (self, event) {
            (Self::Initial | Self::Success | Self::Failure, RefreshEvent::Started) => {
                Self::Loading
            }
            (Self::Loading, RefreshEvent::Succeeded) => Self::Success,
            (Self::Loading, RefreshEvent::Failed) => Self::Failure,

            // Invalid transitions - stay in current state
            (status, _) => status,
        }
    }

    /// Check if a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the last refresh settled (successfully or not).
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

impl Default for LoadStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Events in the refresh lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    /// A refresh call was issued.
    Started,
    /// The store responded with the full list.
    Succeeded,
    /// The store was unreachable or rejected the call.
    Failed,
}
