//! State management for the habit list.
//!
//! This module provides the habit store: the authoritative in-memory habit
//! list, its hydration from durable storage, and autosave on every mutation.

pub mod habit;
pub mod store;

pub use habit::Habit;
pub use store::{HabitStore, ListSummary, PersistStatus};
