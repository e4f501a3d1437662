//! Local key-value storage seam.
//!
//! The draft store only needs three string operations on named slots. The
//! SQLite [`crate::Database`] provides them on disk; [`MemoryStorage`] keeps
//! them in process for tests and embedders that do not want a file.

use std::collections::HashMap;

use jiff::Timestamp;

use crate::error::Result;

/// Named string slots, in the spirit of a browser's local storage.
pub trait SlotStorage {
    /// Read a slot. `Ok(None)` when the slot has never been written or was
    /// removed.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// When the slot was last written, if the backend tracks it.
    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let _ = key;
        Ok(None)
    }
}

/// In-process storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, (String, Timestamp)>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).map(|(value, _)| value.clone()))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots
            .insert(key.to_string(), (value.to_string(), Timestamp::now()));
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        Ok(self.slots.get(key).map(|(_, at)| *at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get_item("k").unwrap().is_none());

        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
        assert!(storage.updated_at("k").unwrap().is_some());

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert!(storage.is_empty());
        assert!(storage.updated_at("k").unwrap().is_none());
    }
}
