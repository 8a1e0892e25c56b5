//! Mock UI for tests.

use super::{OutputMode, UserInterface};

/// Recording UI implementation for unit tests.
///
/// Captures every message by kind so tests can assert on what was shown.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a mock UI in normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain messages shown so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages shown so far.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warnings shown so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors shown so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Headers shown so far.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Check whether any captured output of any kind contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.headers)
            .any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_records_each_kind() {
        let mut ui = MockUI::new();
        ui.message("a message");
        ui.success("a success");
        ui.warning("a warning");
        ui.error("an error");
        ui.show_header("a header");

        assert_eq!(ui.messages(), ["a message"]);
        assert_eq!(ui.successes(), ["a success"]);
        assert_eq!(ui.warnings(), ["a warning"]);
        assert_eq!(ui.errors(), ["an error"]);
        assert_eq!(ui.headers(), ["a header"]);
    }

    #[test]
    fn contains_searches_all_kinds() {
        let mut ui = MockUI::new();
        ui.warning("habit name is empty");

        assert!(ui.contains("empty"));
        assert!(!ui.contains("missing"));
    }
}
