//! Persistent habit store.
//!
//! The store owns the ordered habit list (newest first), hydrates it once
//! from durable storage, and writes a full snapshot back after every
//! effective mutation. Storage failures are caught and logged, never
//! surfaced: the in-memory list stays authoritative for the session.

use crate::error::Result;
use crate::storage::{SnapshotStorage, HABITS_KEY};

use super::Habit;

/// Write-completion outcome of a mutation.
///
/// Storage failures stay invisible to the end user, but callers can still
/// observe whether the snapshot write completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStatus {
    /// The mutation was applied and the snapshot written.
    Saved,
    /// The mutation was applied but the snapshot write failed.
    Failed,
    /// The mutation was a no-op; nothing was written.
    Skipped,
}

impl PersistStatus {
    /// Whether the mutation changed the list.
    pub fn mutated(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Summary counts for the status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

/// Callback invoked with the current list after hydration and after every
/// effective mutation.
pub type Subscriber = Box<dyn FnMut(&[Habit])>;

/// The authoritative habit list and its durable mirror.
///
/// [`HabitStore::initialize`] must run before any mutation; the CLI
/// constructs, hydrates, and uses the store within a single invocation, so
/// mutations never race hydration.
pub struct HabitStore<S: SnapshotStorage> {
    storage: S,
    habits: Vec<Habit>,
    subscribers: Vec<Subscriber>,
}

impl<S: SnapshotStorage> HabitStore<S> {
    /// Create a store with an empty list. Call [`initialize`] to hydrate.
    ///
    /// [`initialize`]: HabitStore::initialize
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            habits: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Hydrate the list from the persisted snapshot, best-effort.
    ///
    /// A missing snapshot leaves the list empty; a malformed snapshot or a
    /// read failure is logged and swallowed, also leaving the list empty.
    /// The app must stay usable regardless of what storage returns.
    pub fn initialize(&mut self) {
        self.habits = match self.load_snapshot() {
            Ok(Some(habits)) => {
                tracing::debug!(count = habits.len(), "hydrated habit list");
                habits
            }
            Ok(None) => {
                tracing::debug!("no snapshot found, starting with empty list");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("failed to load habits, starting fresh: {}", e);
                Vec::new()
            }
        };
        self.notify();
    }

    fn load_snapshot(&self) -> Result<Option<Vec<Habit>>> {
        let Some(raw) = self.storage.get(HABITS_KEY)? else {
            return Ok(None);
        };

        let habits: Vec<Habit> = serde_json::from_str(&raw).map_err(|e| {
            crate::error::TallyError::SnapshotParse {
                key: HABITS_KEY.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Some(habits))
    }

    /// Add a habit named `name`, prepending it to the list.
    ///
    /// The name is trimmed first; an empty result is a no-op. Duplicate
    /// names are allowed — only ids are unique.
    pub fn add(&mut self, name: &str) -> PersistStatus {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring empty habit name");
            return PersistStatus::Skipped;
        }

        let habit = Habit::new(trimmed);
        tracing::debug!(id = %habit.id, name = %habit.name, "adding habit");
        self.habits.insert(0, habit);

        let status = self.persist();
        self.notify();
        status
    }

    /// Flip `done_today` of the habit with the given id.
    ///
    /// An unknown id is a tolerated no-op, not an error: ids always
    /// originate from this store's own list.
    pub fn toggle(&mut self, id: &str) -> PersistStatus {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            tracing::debug!(id = %id, "toggle for unknown habit id ignored");
            return PersistStatus::Skipped;
        };

        habit.toggle();
        tracing::debug!(id = %id, done = habit.done_today, "toggled habit");

        let status = self.persist();
        self.notify();
        status
    }

    /// The current habit list, newest first.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Look up a habit by exact id.
    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Summary counts for the status display.
    pub fn summary(&self) -> ListSummary {
        let done = self.habits.iter().filter(|h| h.done_today).count();
        ListSummary {
            total: self.habits.len(),
            done,
            pending: self.habits.len() - done,
        }
    }

    /// Register a callback invoked with the current list after hydration and
    /// after every effective mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Habit]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Write the full list as a snapshot, overwriting any prior one.
    ///
    /// Write failures are logged and swallowed; no retry. The in-memory
    /// list remains the source of truth for the current session.
    fn persist(&mut self) -> PersistStatus {
        let snapshot = match serde_json::to_string(&self.habits) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("failed to serialize habits: {}", e);
                return PersistStatus::Failed;
            }
        };

        match self.storage.set(HABITS_KEY, &snapshot) {
            Ok(()) => PersistStatus::Saved,
            Err(e) => {
                tracing::warn!("failed to save habits: {}", e);
                PersistStatus::Failed
            }
        }
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.habits);
        }
    }
}
