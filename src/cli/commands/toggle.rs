//! Toggle command implementation.
//!
//! The `tally toggle <id>` command flips a habit's done-today flag. The id
//! may be an unambiguous prefix of a full id; prefix resolution is a CLI
//! convenience, the store itself only matches exact ids.

use std::path::{Path, PathBuf};

use crate::cli::args::ToggleArgs;
use crate::error::Result;
use crate::state::HabitStore;
use crate::storage::SnapshotStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The toggle command implementation.
pub struct ToggleCommand {
    data_dir: PathBuf,
    args: ToggleArgs,
}

/// Outcome of resolving a user-supplied id prefix against the list.
enum IdMatch {
    Exact(String),
    None,
    Ambiguous(usize),
}

impl ToggleCommand {
    /// Create a new toggle command.
    pub fn new(data_dir: &Path, args: ToggleArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    fn resolve_id<S: SnapshotStorage>(&self, store: &HabitStore<S>) -> IdMatch {
        let matches: Vec<&str> = store
            .habits()
            .iter()
            .filter(|h| h.id.starts_with(&self.args.id))
            .map(|h| h.id.as_str())
            .collect();

        match matches.len() {
            0 => IdMatch::None,
            1 => IdMatch::Exact(matches[0].to_string()),
            n => IdMatch::Ambiguous(n),
        }
    }
}

impl Command for ToggleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = super::open_store(&self.data_dir);

        let id = match self.resolve_id(&store) {
            IdMatch::Exact(id) => id,
            IdMatch::None => {
                // Tolerant no-op, mirroring the store's unknown-id policy.
                ui.warning(&format!("No habit matches id '{}'", self.args.id));
                return Ok(CommandResult::success());
            }
            IdMatch::Ambiguous(n) => {
                ui.warning(&format!(
                    "Id prefix '{}' matches {} habits, nothing toggled",
                    self.args.id, n
                ));
                return Ok(CommandResult::success());
            }
        };

        store.toggle(&id);

        if let Some(habit) = store.get(&id) {
            let state = if habit.done_today { "done" } else { "pending" };
            ui.success(&format!("'{}' is now {}", habit.name, state));
            display::show_habit(ui, habit);
        }

        Ok(CommandResult::success())
    }
}
