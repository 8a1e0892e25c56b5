//! Durable key-value storage for habit snapshots.
//!
//! This module provides:
//! - [`SnapshotStorage`] trait abstracting the key-value contract
//! - [`FileStorage`] for on-disk persistence under the data directory
//! - [`MemoryStorage`] for tests, with fault injection

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Storage key for the habit list snapshot.
pub const HABITS_KEY: &str = "habits";

/// Durable key-value storage contract.
///
/// Values are full serialized snapshots; a `set` overwrites any prior value
/// for the key. Implementations must round-trip values exactly.
pub trait SnapshotStorage {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
