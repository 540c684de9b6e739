//! Key-value persistence
//!
//! The poll engine persists whole serialized records under string keys. This
//! module defines the store abstraction and the key layout, so a different
//! backend can be substituted without touching poll logic.
//!
//! Key layout:
//! - `currentPoll`: the single active poll record, overwritten on creation
//!   and on every accepted vote.
//! - `comments-<pollId>`: the ordered comment list for that poll id.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key holding the single active poll.
pub const CURRENT_POLL_KEY: &str = "currentPoll";

/// Key holding the comment list for a poll id.
pub fn comments_key(poll_id: &str) -> String {
    format!("comments-{poll_id}")
}

/// Store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing storage could not be read or written
    #[error("failed to access store: {0}")]
    Io(#[from] std::io::Error),

    /// Store contents could not be encoded
    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string-keyed store of serialized records.
///
/// Receivers are shared so one store instance can serve several readers;
/// backends use interior locking. Operations are whole-value: `set` always
/// overwrites, there are no partial updates.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
