//! Shared display helpers for habit rendering.
//!
//! Used by `list` and `toggle` so a habit line looks the same everywhere.

use crate::state::Habit;
use crate::ui::UserInterface;

/// Marker for a habit's daily state.
pub fn done_marker(done: bool) -> &'static str {
    if done {
        "●"
    } else {
        "○"
    }
}

/// Print a single habit line: marker, id, name.
pub fn show_habit(ui: &mut dyn UserInterface, habit: &Habit) {
    ui.message(&format!(
        "  {} {}  {}",
        done_marker(habit.done_today),
        habit.id,
        habit.name
    ));
}

/// Print the full habit list, or a friendly empty-state line.
pub fn show_habit_list(ui: &mut dyn UserInterface, habits: &[Habit]) {
    if habits.is_empty() {
        ui.message("No habits yet. Add one with `tally add <name>`!");
        return;
    }

    for habit in habits {
        show_habit(ui, habit);
    }
}
