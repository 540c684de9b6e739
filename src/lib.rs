//! pollbox library
//!
//! A poll lifecycle engine for single-active-poll tools: compose a timed
//! question with options, persist it in a pluggable key-value store, collect
//! one vote per view session, and reveal results live or once the poll
//! expires. Anonymous comments attach to a poll by id and outlive it.
//!
//! The crate owns state, validation, arithmetic, and persistence glue. The
//! host application owns rendering and drives the clock: all time-dependent
//! predicates take an epoch-millisecond `now_ms` argument, typically refreshed
//! on a 1-second cadence via [`ViewSession::tick`]. No threads or timers are
//! spawned here.
//!
//! ```
//! use pollbox::{MemoryStore, PollDraft, PollDuration, PollEngine, ViewSession};
//!
//! let engine = PollEngine::new(MemoryStore::new());
//! let now = pollbox::time::now_millis();
//!
//! let draft = PollDraft::new()
//!     .with_question("Tabs or spaces?")
//!     .with_options(["Tabs", "Spaces"])
//!     .with_duration(PollDuration::OneHour);
//! let mut poll = engine.publish(&draft, now).unwrap();
//!
//! let mut session = ViewSession::new(now);
//! session.select(poll.options[0].id.clone());
//! assert!(engine.submit_vote(&mut poll, &mut session));
//! assert_eq!(poll.total_votes(), 1);
//! ```

pub mod poll;
pub mod store;
pub mod time;

pub use poll::{
    Comment, DraftOption, Poll, PollDraft, PollDuration, PollEngine, PollOption, ValidationError,
    ViewSession,
};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
