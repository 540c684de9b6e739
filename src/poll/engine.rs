//! Poll Engine
//!
//! Lifecycle operations over a key-value store: publish a draft as the single
//! current poll, load it back tolerantly, apply guarded votes, and append
//! comments. All persistence is whole-record overwrite of a serialized JSON
//! value; there are no transactions and no field-level updates. Two sessions
//! writing through the same store race and the last write wins, which is
//! accepted for this storage model.

use serde::Serialize;

use super::draft::{PollDraft, ValidationError};
use super::model::{Comment, Poll};
use super::session::ViewSession;
use crate::store::{comments_key, KeyValueStore, CURRENT_POLL_KEY};

/// Poll lifecycle engine bound to one store.
///
/// Nothing here is fatal: store failures and malformed records are logged and
/// treated as absent data, so a view over this engine can always render.
#[derive(Debug)]
pub struct PollEngine<S> {
    store: S,
}

impl<S: KeyValueStore> PollEngine<S> {
    /// Create an engine over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate a draft and persist the resulting poll as the single current
    /// record, replacing any prior poll.
    ///
    /// Comment records for a replaced poll are left behind under their own
    /// key, orphaned but harmless.
    pub fn publish(&self, draft: &PollDraft, now_ms: i64) -> Result<Poll, ValidationError> {
        let poll = draft.finish(now_ms)?;
        self.persist(CURRENT_POLL_KEY, &poll);
        tracing::debug!(poll_id = %poll.id, expires_at = poll.expires_at, "published current poll");
        Ok(poll)
    }

    /// Load the current poll, or `None` when there is none or the stored
    /// record is unreadable. Corruption never propagates to the caller.
    pub fn current_poll(&self) -> Option<Poll> {
        let raw = match self.store.get(CURRENT_POLL_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read current poll, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(poll) => Some(poll),
            Err(err) => {
                tracing::warn!(error = %err, "current poll record is not valid JSON, treating as absent");
                None
            }
        }
    }

    /// Cast a vote for `option_id` on behalf of `session`.
    ///
    /// Returns whether the vote was accepted. Rejected without mutation when
    /// the session already voted, the poll is expired at the session clock,
    /// or the option id is unknown. An accepted vote increments exactly one
    /// counter, locks the session, and persists the whole poll record.
    pub fn cast_vote(&self, poll: &mut Poll, session: &mut ViewSession, option_id: &str) -> bool {
        if session.has_voted() || poll.is_expired(session.now()) {
            return false;
        }
        let Some(option) = poll.options.iter_mut().find(|o| o.id == option_id) else {
            return false;
        };
        option.votes += 1;
        session.mark_voted();
        self.persist(CURRENT_POLL_KEY, poll);
        tracing::debug!(poll_id = %poll.id, option_id, "vote recorded");
        true
    }

    /// Cast a vote for the session's current selection. No selection is a
    /// silent no-op returning `false`.
    pub fn submit_vote(&self, poll: &mut Poll, session: &mut ViewSession) -> bool {
        let Some(option_id) = session.selected_option().map(str::to_string) else {
            return false;
        };
        self.cast_vote(poll, session, &option_id)
    }

    /// All comments for a poll id, oldest first. Missing or unreadable data
    /// yields an empty list.
    pub fn comments(&self, poll_id: &str) -> Vec<Comment> {
        let key = comments_key(poll_id);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, key = %key, "failed to read comments, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(comments) => comments,
            Err(err) => {
                tracing::warn!(error = %err, key = %key, "comment record is not valid JSON, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append a comment to a poll's list and persist it.
    ///
    /// The text is trimmed; whitespace-only input is a no-op returning
    /// `None`. Comments attach purely by id, so they can be posted to an
    /// expired poll and survive the poll being replaced.
    pub fn post_comment(&self, poll_id: &str, text: &str, now_ms: i64) -> Option<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let comment = Comment {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            timestamp: now_ms,
        };
        let mut comments = self.comments(poll_id);
        comments.push(comment.clone());
        self.persist(&comments_key(poll_id), &comments);
        tracing::debug!(poll_id, comment_id = %comment.id, "comment posted");
        Some(comment)
    }

    /// Serialize and overwrite one record. Failures are logged and swallowed;
    /// the in-memory state the caller holds remains the source of truth for
    /// the rest of the view's life.
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, key, "failed to serialize record, skipping persist");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &json) {
            tracing::warn!(error = %err, key, "failed to write record");
        }
    }
}
