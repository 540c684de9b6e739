//! Poll drafts
//!
//! The creation-time buffer a form edits before a poll exists: mutable option
//! rows, a duration choice, and the hide-results flag. [`PollDraft::finish`]
//! trims and validates the buffer and produces an immutable [`Poll`].

use uuid::Uuid;

use super::model::{Poll, PollDuration, PollOption};

/// Why a draft could not become a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The question is blank after trimming
    #[error("empty question")]
    EmptyQuestion,
    /// Fewer than two options are non-empty after trimming
    #[error("insufficient options")]
    InsufficientOptions,
}

/// A mutable option row being edited in a draft. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOption {
    /// Row ID, carried into the poll when the row survives validation
    pub id: String,
    /// Text buffer, trimmed at finish time
    pub value: String,
}

impl DraftOption {
    /// Create a row with a fresh id.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value: value.into(),
        }
    }
}

/// Creation-time poll buffer.
///
/// New drafts are seeded with two placeholder rows so a form always has
/// something to edit. Rows can be appended, edited, and removed, but the last
/// remaining row cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollDraft {
    /// Question buffer, trimmed at finish time
    pub question: String,
    /// Option rows in display order
    pub options: Vec<DraftOption>,
    /// Selected duration
    pub duration: PollDuration,
    /// Hide results until expiry
    pub hide_results: bool,
}

impl Default for PollDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl PollDraft {
    /// Create a draft seeded with two placeholder option rows.
    pub fn new() -> Self {
        Self {
            question: String::new(),
            options: vec![DraftOption::new("Option 1"), DraftOption::new("Option 2")],
            duration: PollDuration::OneHour,
            hide_results: false,
        }
    }

    /// Set the question.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Replace all option rows with rows holding the given values.
    pub fn with_options<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.options = values.into_iter().map(DraftOption::new).collect();
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: PollDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Hide results until the poll expires.
    pub fn with_hidden_results(mut self, hide: bool) -> Self {
        self.hide_results = hide;
        self
    }

    /// Append a placeholder row numbered after the existing ones.
    pub fn add_option(&mut self) -> &DraftOption {
        let index = self.options.len();
        self.options.push(DraftOption::new(format!("Option {}", index + 1)));
        &self.options[index]
    }

    /// Remove a row by id. The last remaining row is kept regardless.
    pub fn remove_option(&mut self, id: &str) {
        if self.options.len() <= 1 {
            return;
        }
        self.options.retain(|o| o.id != id);
    }

    /// Overwrite a row's text buffer. Unknown ids are ignored.
    pub fn set_option(&mut self, id: &str, value: impl Into<String>) {
        if let Some(row) = self.options.iter_mut().find(|o| o.id == id) {
            row.value = value.into();
        }
    }

    /// Validate the buffer and produce a poll expiring at
    /// `now_ms + duration`.
    ///
    /// The question is trimmed and must be non-empty. Option values are
    /// trimmed, blank rows are discarded, and at least two must survive. Row
    /// ids carry over into the poll; counters start at zero. The expiry time
    /// is computed once here and never re-derived.
    pub fn finish(&self, now_ms: i64) -> Result<Poll, ValidationError> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }

        let options: Vec<PollOption> = self
            .options
            .iter()
            .filter_map(|row| {
                let label = row.value.trim();
                if label.is_empty() {
                    return None;
                }
                Some(PollOption {
                    id: row.id.clone(),
                    label: label.to_string(),
                    votes: 0,
                })
            })
            .collect();
        if options.len() < 2 {
            return Err(ValidationError::InsufficientOptions);
        }

        Ok(Poll {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            options,
            expires_at: now_ms + self.duration.as_millis(),
            hide_results: self.hide_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_seeds_two_rows() {
        let draft = PollDraft::new();
        assert_eq!(draft.options.len(), 2);
        assert_eq!(draft.options[0].value, "Option 1");
        assert_eq!(draft.options[1].value, "Option 2");
        assert_ne!(draft.options[0].id, draft.options[1].id);
    }

    #[test]
    fn test_add_option_numbers_rows() {
        let mut draft = PollDraft::new();
        let added = draft.add_option().value.clone();
        assert_eq!(added, "Option 3");
        assert_eq!(draft.options.len(), 3);
    }

    #[test]
    fn test_remove_option_keeps_last_row() {
        let mut draft = PollDraft::new();
        let first = draft.options[0].id.clone();
        let second = draft.options[1].id.clone();

        draft.remove_option(&first);
        assert_eq!(draft.options.len(), 1);

        // Removing the last remaining row is refused.
        draft.remove_option(&second);
        assert_eq!(draft.options.len(), 1);
        assert_eq!(draft.options[0].id, second);
    }

    #[test]
    fn test_set_option_edits_in_place() {
        let mut draft = PollDraft::new();
        let id = draft.options[0].id.clone();
        draft.set_option(&id, "Rust");
        assert_eq!(draft.options[0].value, "Rust");

        draft.set_option("unknown", "ignored");
        assert_eq!(draft.options[1].value, "Option 2");
    }

    #[test]
    fn test_finish_rejects_blank_question() {
        let draft = PollDraft::new().with_question("   \n\t ");
        assert_eq!(draft.finish(0), Err(ValidationError::EmptyQuestion));
    }

    #[test]
    fn test_finish_blank_question_rejected_before_options() {
        // Even with plenty of valid options, a blank question fails first.
        let draft = PollDraft::new()
            .with_question("")
            .with_options(["A", "B", "C"]);
        assert_eq!(draft.finish(0), Err(ValidationError::EmptyQuestion));
    }

    #[test]
    fn test_finish_rejects_fewer_than_two_options() {
        let draft = PollDraft::new()
            .with_question("Q?")
            .with_options(["only one"]);
        assert_eq!(draft.finish(0), Err(ValidationError::InsufficientOptions));

        let draft = PollDraft::new().with_question("Q?").with_options::<_, String>([]);
        assert_eq!(draft.finish(0), Err(ValidationError::InsufficientOptions));
    }

    #[test]
    fn test_finish_discards_blank_rows() {
        let draft = PollDraft::new()
            .with_question("Q?")
            .with_options(["A", "   ", "B", ""]);
        let poll = draft.finish(0).unwrap();
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.options[0].label, "A");
        assert_eq!(poll.options[1].label, "B");
    }

    #[test]
    fn test_finish_one_surviving_row_rejected() {
        let draft = PollDraft::new()
            .with_question("Q?")
            .with_options(["A", "   ", ""]);
        assert_eq!(draft.finish(0), Err(ValidationError::InsufficientOptions));
    }

    #[test]
    fn test_finish_trims_question_and_labels() {
        let draft = PollDraft::new()
            .with_question("  Q?  ")
            .with_options(["  A ", " B"]);
        let poll = draft.finish(0).unwrap();
        assert_eq!(poll.question, "Q?");
        assert_eq!(poll.options[0].label, "A");
        assert_eq!(poll.options[1].label, "B");
    }

    #[test]
    fn test_finish_expiry_offset_is_exact() {
        let now = 1_700_000_000_000;
        for (duration, offset) in [
            (PollDuration::OneHour, 3_600_000),
            (PollDuration::TwelveHours, 43_200_000),
            (PollDuration::TwentyFourHours, 86_400_000),
        ] {
            let poll = PollDraft::new()
                .with_question("Q?")
                .with_options(["A", "B"])
                .with_duration(duration)
                .finish(now)
                .unwrap();
            assert_eq!(poll.expires_at - now, offset);
        }
    }

    #[test]
    fn test_finish_carries_row_ids_and_zero_counters() {
        let draft = PollDraft::new().with_question("Q?").with_options(["A", "B"]);
        let ids: Vec<String> = draft.options.iter().map(|o| o.id.clone()).collect();
        let poll = draft.finish(0).unwrap();
        for (option, id) in poll.options.iter().zip(ids) {
            assert_eq!(option.id, id);
            assert_eq!(option.votes, 0);
        }
    }

    #[test]
    fn test_finish_respects_hidden_results() {
        let poll = PollDraft::new()
            .with_question("Q?")
            .with_options(["A", "B"])
            .with_hidden_results(true)
            .finish(0)
            .unwrap();
        assert!(poll.hide_results);
    }
}
