//! Command implementations.

pub mod add;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod status;
pub mod toggle;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::state::HabitStore;
use crate::storage::FileStorage;

/// Open and hydrate the habit store backed by `data_dir`.
///
/// Hydration is best-effort: a missing or unreadable snapshot yields an
/// empty store, never an error.
pub(crate) fn open_store(data_dir: &Path) -> HabitStore<FileStorage> {
    let mut store = HabitStore::new(FileStorage::new(data_dir));
    store.initialize();
    store
}
