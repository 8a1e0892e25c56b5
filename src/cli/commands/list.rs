//! List command implementation.
//!
//! The `tally list` command shows the habit list, newest first. It is also
//! the default when no subcommand is given.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The list command implementation.
pub struct ListCommand {
    data_dir: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(data_dir: &Path, args: ListArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = super::open_store(&self.data_dir);

        if self.args.json {
            let json = serde_json::to_string_pretty(store.habits())
                .map_err(|e| crate::error::TallyError::SnapshotEncode {
                    message: e.to_string(),
                })?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Habits");
        display::show_habit_list(ui, store.habits());

        Ok(CommandResult::success())
    }
}
