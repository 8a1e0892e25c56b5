//! Tally - Personal habit tracker with daily check-offs.
//!
//! Tally keeps a list of named habits, each with a done-today flag, persisted
//! as a JSON snapshot across invocations. The habit store hydrates once at
//! startup and autosaves after every mutation; storage failures are logged
//! and swallowed so the tracker stays usable even with a corrupted or missing
//! snapshot.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`state`] - The habit store: hydration, autosave, add/toggle mutations
//! - [`storage`] - Durable key-value storage backends
//! - [`ui`] - Terminal output and theming
//!
//! # Example
//!
//! ```
//! use tally::state::HabitStore;
//! use tally::storage::MemoryStorage;
//!
//! let mut store = HabitStore::new(MemoryStorage::new());
//! store.initialize();
//! store.add("Drink water");
//!
//! let id = store.habits()[0].id.clone();
//! store.toggle(&id);
//! assert!(store.habits()[0].done_today);
//! ```

pub mod cli;
pub mod error;
pub mod state;
pub mod storage;
pub mod ui;

pub use error::{Result, TallyError};
