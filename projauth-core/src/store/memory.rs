//! In-memory store implementation
//!
//! Keeps values in a map for the lifetime of the value. Used in tests and
//! anywhere persistence is not wanted.

use crate::error::ProjauthError;
use crate::store::KeyValueStore;
use std::collections::HashMap;

/// In-memory key-value store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ProjauthError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ProjauthError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ProjauthError> {
        self.items.remove(key);
        Ok(())
    }
}
