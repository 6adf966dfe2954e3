//! Refresh request sequencing.
//!
//! A refresh in flight is not aborted when another one starts; both
//! eventually settle. Without ordering, whichever response arrives last
//! would win, even if it belongs to the older request. The tracker tags
//! each request with a monotonic sequence number and refuses to apply a
//! response older than the newest one already applied.

/// Sequence number of one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshSeq(u64);

impl RefreshSeq {
    /// The numeric value, for diagnostics.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues refresh sequence numbers and decides whether a settled response
/// may still be applied.
#[derive(Debug, Clone, Default)]
pub struct RefreshTracker {
    issued: u64,
    applied: u64,
}

impl RefreshTracker {
    /// Create a tracker with no requests issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new refresh request.
    pub fn begin(&mut self) -> RefreshSeq {
        self.issued += 1;
        RefreshSeq(self.issued)
    }

    /// Decide whether the response for `seq` may be applied.
    ///
    /// Returns `true` and records the application if no newer response has
    /// been applied yet; returns `false` for a stale response, which the
    /// caller must discard.
    pub fn try_apply(&mut self, seq: RefreshSeq) -> bool {
        if seq.0 > self.applied {
            self.applied = seq.0;
            true
        } else {
            false
        }
    }

    /// Check whether a request newer than `seq` has been issued.
    pub fn superseded(&self, seq: RefreshSeq) -> bool {
        self.issued > seq.0
    }
}
