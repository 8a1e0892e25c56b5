//! In-memory snapshot storage for tests.

use std::collections::HashMap;

use anyhow::anyhow;

use crate::error::{Result, TallyError};

use super::SnapshotStorage;

/// In-memory key-value storage.
///
/// Used by unit and integration tests to exercise the habit store without
/// touching the filesystem. Reads and writes can be flipped to fail to test
/// the best-effort hydration and persistence policies.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    write_count: usize,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with a value for `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    /// Make all subsequent reads fail.
    pub fn fail_reads(&mut self) {
        self.fail_reads = true;
    }

    /// Make all subsequent writes fail.
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    /// Number of successful writes observed.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Peek at the stored value for `key` without going through the trait.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }
}

impl SnapshotStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(TallyError::Other(anyhow!("injected read failure")));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(TallyError::Other(anyhow!("injected write failure")));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.write_count += 1;
        Ok(())
    }
}
