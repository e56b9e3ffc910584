//! Storage trait definition.
//!
//! Implementations hold opaque strings under the fixed keys of
//! [`StoreKey`]. Values are stored and returned verbatim.

use super::types::StoreKey;
use crate::error::Result;

/// Key-value string store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been stored under `key`.
    fn get(&self, key: StoreKey) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the value cannot be written.
    fn set(&mut self, key: StoreKey, value: &str) -> Result<()>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: StoreKey) -> Result<()>;
}
