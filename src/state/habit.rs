//! The habit record and id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A tracked habit with a daily completion flag.
///
/// `id` and `name` are immutable after creation; only `done_today` changes,
/// via [`Habit::toggle`]. Snapshots are serialized in camelCase so they match
/// the on-disk format of earlier versions of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,

    /// Display name. Non-empty; uniqueness is not required.
    pub name: String,

    /// Whether the habit has been checked off today.
    pub done_today: bool,

    /// When the habit was created.
    #[serde(default = "unix_epoch")]
    pub created_at: DateTime<Utc>,
}

// Snapshots written before created_at existed hydrate to the epoch.
fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Process-wide sequence folded into each id so habits created within the
/// same clock tick still get distinct ids.
static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

impl Habit {
    /// Create a new habit with a freshly generated id and `done_today` unset.
    ///
    /// The caller is responsible for validating the name (see
    /// `HabitStore::add`, which trims and rejects empty names).
    pub fn new(name: impl Into<String>) -> Self {
        let created_at = Utc::now();
        Self {
            id: generate_id(created_at),
            name: name.into(),
            done_today: false,
            created_at,
        }
    }

    /// Flip the daily completion flag.
    pub fn toggle(&mut self) {
        self.done_today = !self.done_today;
    }
}

/// Generate a collision-resistant habit id.
///
/// Hashes the creation timestamp together with a process-wide sequence
/// number and keeps the first 8 bytes as a 16-character hex string.
fn generate_id(at: DateTime<Utc>) -> String {
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);

    let mut hasher = Sha256::new();
    hasher.update(at.timestamp_nanos_opt().unwrap_or_default().to_be_bytes());
    hasher.update(seq.to_be_bytes());

    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}
