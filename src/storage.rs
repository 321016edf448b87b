use std::error::Error;
use std::fmt;

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// The three records a session keeps, each stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StorageKey {
    CurrentRound,
    History,
    Settings,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::CurrentRound,
        StorageKey::History,
        StorageKey::Settings,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::CurrentRound => "golf.currentRound",
            StorageKey::History => "golf.history",
            StorageKey::Settings => "golf.settings",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(format!("sqlite: {value}"))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(format!("json: {value}"))
    }
}

/// Durable key/value store for serialized session records.
pub trait Storage {
    /// # Errors
    ///
    /// Returns `Err` if the backend cannot be read.
    fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns `Err` if the value cannot be written (full disk, read-only file, ...).
    fn put(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `Err` if the backend cannot be written.
    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError>;

    /// Drops every record.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend cannot be written.
    fn clear(&mut self) -> Result<(), StorageError> {
        for key in StorageKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}
