//! In-memory UI for command tests.
//!
//! # Example
//!
//! ```
//! use ansys_report::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("No Python interpreter found");
//! ui.document("report body");
//!
//! assert!(ui.has_warning("interpreter"));
//! assert_eq!(ui.documents(), &["report body"]);
//! ```

use super::UserInterface;

/// Records everything a command prints.
#[derive(Debug, Default)]
pub struct MockUI {
    warnings: Vec<String>,
    errors: Vec<String>,
    documents: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Documents in the order they were written.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Whether any warning contains `needle`.
    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn document(&mut self, text: &str) {
        self.documents.push(text.to_string());
    }
}
