//! Terminal UI implementation.

use super::{should_use_colors, OutputMode, TallyTheme, UserInterface};

/// UI implementation writing to stdout/stderr with console styling.
pub struct TerminalUI {
    mode: OutputMode,
    theme: TallyTheme,
}

impl TerminalUI {
    /// Create a terminal UI, picking a colored or plain theme based on the
    /// environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            TallyTheme::new()
        } else {
            TallyTheme::plain()
        };
        Self { mode, theme }
    }

    /// Get the active theme.
    pub fn theme(&self) -> &TallyTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_header(title));
        }
    }
}

/// Create the UI for the current invocation.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_returns_terminal_ui() {
        let ui = create_ui(OutputMode::Normal);
        assert_eq!(ui.output_mode(), OutputMode::Normal);
    }
}
