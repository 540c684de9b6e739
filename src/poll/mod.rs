//! Poll lifecycle: model, creation drafts, the persistence engine, and
//! per-view session state.

mod draft;
mod engine;
mod model;
mod session;

pub use draft::{DraftOption, PollDraft, ValidationError};
pub use engine::PollEngine;
pub use model::{Comment, Poll, PollDuration, PollOption};
pub use session::ViewSession;
