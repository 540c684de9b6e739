//! Poll records
//!
//! The persisted data model plus the read-time predicates derived from it:
//! expiry, result visibility, vote totals, and per-option percentages.

use serde::{Deserialize, Serialize};

use crate::time::HOUR_MS;

/// How long a poll accepts votes. Fixed choices, no custom durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollDuration {
    /// Expires one hour after creation
    #[default]
    OneHour,
    /// Expires twelve hours after creation
    TwelveHours,
    /// Expires twenty-four hours after creation
    TwentyFourHours,
}

impl PollDuration {
    /// Millisecond offset added to the creation time.
    pub fn as_millis(self) -> i64 {
        match self {
            PollDuration::OneHour => HOUR_MS,
            PollDuration::TwelveHours => 12 * HOUR_MS,
            PollDuration::TwentyFourHours => 24 * HOUR_MS,
        }
    }
}

/// One selectable answer within a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    /// Option ID (unique within the poll)
    pub id: String,
    /// Option label, trimmed and non-empty
    pub label: String,
    /// Vote counter, starts at 0
    #[serde(default)]
    pub votes: u32,
}

/// A question with a fixed set of options, an expiry time, and a
/// results-visibility flag.
///
/// Everything except the vote counters is immutable after creation. Expiry is
/// a derived read-time predicate on [`Poll::expires_at`], never a stored state
/// transition, so a poll reloaded long after its deadline reports expired
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    /// Unique poll ID
    pub id: String,
    /// The question being asked, trimmed and non-empty
    pub question: String,
    /// Ordered options, at least two
    pub options: Vec<PollOption>,
    /// Absolute expiry time (epoch ms)
    pub expires_at: i64,
    /// Suppress result display to voters until expiry
    #[serde(default)]
    pub hide_results: bool,
}

impl Poll {
    /// Whether the poll no longer accepts votes at `now_ms`.
    ///
    /// Monotonic in `now_ms` since `expires_at` is fixed at creation.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }

    /// Whether results may be shown at `now_ms`. Expiry always overrides a
    /// hide-results configuration.
    pub fn show_results(&self, now_ms: i64) -> bool {
        !self.hide_results || self.is_expired(now_ms)
    }

    /// Sum of all option vote counters.
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// Look up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&PollOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Rounded percentage of the total vote count held by `option_id`.
    ///
    /// Defined as 0 when no votes have been cast or the id is unknown; the
    /// zero-votes case is an explicit branch, not a guarded division.
    pub fn percentage(&self, option_id: &str) -> u32 {
        let total = self.total_votes();
        if total == 0 {
            return 0;
        }
        match self.option(option_id) {
            Some(option) => (f64::from(option.votes) * 100.0 / f64::from(total)).round() as u32,
            None => 0,
        }
    }
}

/// An anonymous comment attached to a poll by id.
///
/// Comments are append-only and stored separately from the poll record, so
/// they survive both poll expiry and the poll being replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment ID
    pub id: String,
    /// Comment text, trimmed and non-empty
    pub text: String,
    /// When the comment was posted (epoch ms)
    pub timestamp: i64,
}
