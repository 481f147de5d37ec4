//! Backends for the single key-value slot that holds the history JSON array.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use redis::Commands;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slot unavailable: {0}")]
    Unavailable(String),
}

/// A single named blob. `get` returns `None` when nothing has been written yet.
pub trait HistorySlot: Send + Sync {
    fn get(&self) -> Result<Option<String>, SlotError>;
    fn set(&self, value: String) -> Result<(), SlotError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Process-local slot. Used in tests and when no durable backend is configured.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
    read_only: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with raw content, valid JSON or not.
    #[cfg(test)]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(content.into())),
            read_only: false,
        }
    }

    /// A slot whose writes always fail, as with an exhausted storage quota.
    #[cfg(test)]
    pub fn read_only(content: Option<String>) -> Self {
        Self {
            value: Mutex::new(content),
            read_only: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl HistorySlot for MemorySlot {
    fn get(&self) -> Result<Option<String>, SlotError> {
        Ok(self.raw())
    }

    fn set(&self, value: String) -> Result<(), SlotError> {
        if self.read_only {
            return Err(SlotError::Unavailable("memory slot is read-only".to_string()));
        }
        let mut guard = self
            .value
            .lock()
            .map_err(|_| SlotError::Unavailable("memory slot lock poisoned".to_string()))?;
        *guard = Some(value);
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

/// Slot stored under one Redis string key. Uses the blocking client; callers on
/// an async runtime should go through `spawn_blocking`.
pub struct RedisSlot {
    client: redis::Client,
    key: String,
}

impl RedisSlot {
    pub fn new(client: redis::Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }
}

impl HistorySlot for RedisSlot {
    fn get(&self) -> Result<Option<String>, SlotError> {
        let mut conn = self.client.get_connection()?;
        let value: Option<String> = conn.get(&self.key)?;
        Ok(value)
    }

    fn set(&self, value: String) -> Result<(), SlotError> {
        let mut conn = self.client.get_connection()?;
        conn.set::<_, _, ()>(&self.key, value)?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// File
// ────────────────────────────────────────────────────────────────────────────

/// Slot stored as a whole JSON file. Writes land in a temp file in the same
/// directory and are renamed over the target, so readers never see a torn file.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistorySlot for FileSlot {
    fn get(&self) -> Result<Option<String>, SlotError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, value: String) -> Result<(), SlotError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| SlotError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_starts_empty_and_round_trips() {
        let slot = MemorySlot::new();
        assert!(slot.get().unwrap().is_none());
        slot.set("[]".to_string()).unwrap();
        assert_eq!(slot.get().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_read_only_memory_slot_rejects_writes() {
        let slot = MemorySlot::read_only(Some("[]".to_string()));
        assert!(matches!(
            slot.set("[1]".to_string()),
            Err(SlotError::Unavailable(_))
        ));
        assert_eq!(slot.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_slot_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("history.json"));
        assert!(slot.get().unwrap().is_none());
    }

    #[test]
    fn test_file_slot_overwrites_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested").join("history.json"));
        slot.set("[1]".to_string()).unwrap();
        slot.set("[2]".to_string()).unwrap();
        assert_eq!(slot.get().unwrap().as_deref(), Some("[2]"));
    }
}
