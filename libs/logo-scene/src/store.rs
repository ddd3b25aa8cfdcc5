//! # Persistence Slot
//!
//! String key-value storage for the last loaded markup. The browser build
//! backs this with `localStorage`; [`MemoryStore`] serves native hosts and
//! tests.

use std::collections::HashMap;

use crate::error::StoreError;

/// Minimal string key-value storage.
pub trait KeyValueStore {
    /// Reads a value, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("user_svg").unwrap(), None);

        store.set("user_svg", "<svg/>").unwrap();
        store.set("user_svg", "<svg></svg>").unwrap();
        assert_eq!(store.get("user_svg").unwrap().as_deref(), Some("<svg></svg>"));
        assert_eq!(store.len(), 1);
    }
}
