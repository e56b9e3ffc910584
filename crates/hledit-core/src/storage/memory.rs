//! In-memory store.

use std::collections::HashMap;

use super::traits::KeyValueStore;
use super::types::StoreKey;
use crate::error::Result;

/// `HashMap`-backed store. Nothing outlives the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: StoreKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>> {
        Ok(self.values.get(&key).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<()> {
        self.values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<()> {
        self.values.remove(&key);
        Ok(())
    }
}
