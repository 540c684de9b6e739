//! View session state
//!
//! The small state record a poll view owns while it is on screen: the current
//! selection, the session-local has-voted flag, and the clock value the host
//! last pushed in. A fresh session is created on every navigation, so the
//! has-voted guard does not survive a reload even though persisted vote
//! counters do. That is the accepted identity model of an anonymous,
//! no-login tool.

use super::model::Poll;

/// Per-view state for one visitor looking at one poll.
#[derive(Debug, Clone)]
pub struct ViewSession {
    selected_option: Option<String>,
    has_voted: bool,
    now_ms: i64,
}

impl ViewSession {
    /// Start a session at the given clock value.
    pub fn new(now_ms: i64) -> Self {
        Self {
            selected_option: None,
            has_voted: false,
            now_ms,
        }
    }

    /// Select an option. Ignored once the session has voted, matching a
    /// locked ballot in the view.
    pub fn select(&mut self, option_id: impl Into<String>) {
        if self.has_voted {
            return;
        }
        self.selected_option = Some(option_id.into());
    }

    /// Clear the current selection.
    pub fn clear_selection(&mut self) {
        if self.has_voted {
            return;
        }
        self.selected_option = None;
    }

    /// The currently selected option id, if any.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    /// Whether this session has already cast its vote.
    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    pub(super) fn mark_voted(&mut self) {
        self.has_voted = true;
    }

    /// Advance the session clock. Hosts call this on their 1-second render
    /// cadence; countdown display and vote eligibility both read from it.
    pub fn tick(&mut self, now_ms: i64) {
        self.now_ms = now_ms;
    }

    /// The clock value the host last pushed in (epoch ms).
    pub fn now(&self) -> i64 {
        self.now_ms
    }

    /// Whether the vote action is currently enabled: a selection exists, the
    /// session has not voted, and the poll has not expired.
    pub fn can_vote(&self, poll: &Poll) -> bool {
        self.selected_option.is_some() && !self.has_voted && !poll.is_expired(self.now_ms)
    }
}
