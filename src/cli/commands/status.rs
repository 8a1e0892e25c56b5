//! Status command implementation.
//!
//! The `tally status` command shows done/pending counts for the day.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    data_dir: PathBuf,
    args: StatusArgs,
}

#[derive(Serialize)]
struct StatusJson {
    total: usize,
    done: usize,
    pending: usize,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(data_dir: &Path, args: StatusArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = super::open_store(&self.data_dir);
        let summary = store.summary();

        if self.args.json {
            let json = serde_json::to_string_pretty(&StatusJson {
                total: summary.total,
                done: summary.done,
                pending: summary.pending,
            })
            .map_err(|e| crate::error::TallyError::SnapshotEncode {
                message: e.to_string(),
            })?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Today");

        if summary.total == 0 {
            ui.message("No habits yet. Add one with `tally add <name>`!");
            return Ok(CommandResult::success());
        }

        ui.message(&format!(
            "  {} of {} done, {} pending",
            summary.done, summary.total, summary.pending
        ));

        Ok(CommandResult::success())
    }
}
