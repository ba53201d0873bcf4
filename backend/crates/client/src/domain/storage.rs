//! Key-Value Storage Trait
//!
//! The client-local store a session lives in: browser local storage in the
//! web build, a file or plain memory elsewhere.

use crate::error::ClientResult;

/// String key-value store
///
/// Each operation is atomic on its own; there is no cross-key transaction.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> ClientResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ClientResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> ClientResult<()>;
}
