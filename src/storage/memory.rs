use std::collections::BTreeMap;

use super::{Storage, StorageError, StorageKey};

/// Non-durable storage. Handy for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<StorageKey, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw record, bypassing serialization.
    #[must_use]
    pub fn with_entry(mut self, key: StorageKey, value: impl Into<String>) -> Self {
        self.entries.insert(key, value.into());
        self
    }

    /// Makes every later write fail, as a full quota would.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    #[must_use]
    pub fn raw(&self, key: StorageKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes {
            Err(StorageError::new("storage quota exceeded"))
        } else {
            Ok(())
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn put(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        self.check_writable()?;
        self.entries.remove(&key);
        Ok(())
    }
}
