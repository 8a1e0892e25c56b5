//! Add command implementation.
//!
//! The `tally add <name>` command creates a new habit at the top of the
//! list. Empty or whitespace-only names are a no-op, matching the store's
//! validation.

use std::path::{Path, PathBuf};

use crate::cli::args::AddArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The add command implementation.
pub struct AddCommand {
    data_dir: PathBuf,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(data_dir: &Path, args: AddArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = super::open_store(&self.data_dir);

        let status = store.add(&self.args.name());
        if !status.mutated() {
            // The store treats an empty name as a silent no-op; the CLI
            // tells the user why nothing happened but still exits zero.
            ui.warning("Habit name is empty, nothing added");
            return Ok(CommandResult::success());
        }

        let habit = &store.habits()[0];
        ui.success(&format!("Added '{}'", habit.name));
        display::show_habit(ui, habit);

        Ok(CommandResult::success())
    }
}
