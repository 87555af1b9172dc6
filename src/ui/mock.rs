//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use shelf::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Loading catalog");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Loading catalog".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{OutputMode, ShelfTheme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    theme: ShelfTheme,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: ShelfTheme::plain(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every captured line of any kind, in no particular grouping.
    pub fn all_output(&self) -> String {
        [
            &self.headers,
            &self.messages,
            &self.successes,
            &self.warnings,
            &self.errors,
        ]
        .iter()
        .flat_map(|lines| lines.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Check if a message was captured.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn theme(&self) -> &ShelfTheme {
        &self.theme
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

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_by_kind() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.success("two");
        ui.warning("three");
        ui.error("four");
        ui.show_header("Catalog");

        assert_eq!(ui.messages(), &["one".to_string()]);
        assert_eq!(ui.successes(), &["two".to_string()]);
        assert_eq!(ui.warnings(), &["three".to_string()]);
        assert_eq!(ui.errors(), &["four".to_string()]);
        assert_eq!(ui.headers(), &["Catalog".to_string()]);
        assert!(ui.all_output().contains("three"));
    }

    #[test]
    fn mock_ui_mode() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        ui.set_output_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn has_message_matches_substring() {
        let mut ui = MockUI::new();
        ui.message("Asedia 1.6.3");
        assert!(ui.has_message("1.6.3"));
        assert!(!ui.has_message("2.0.0"));
    }
}
