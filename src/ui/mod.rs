//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use ansys_report::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.warning("suppressed in quiet mode");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ReportTheme};

/// Where commands send their output.
///
/// Status lines (warnings and errors) are kept apart from documents so that
/// redirecting stdout captures only the report.
pub trait UserInterface {
    /// Report something the user should fix. Hidden in quiet mode.
    fn warning(&mut self, msg: &str);

    /// Report a failure. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Write a finished document (a report) to standard output.
    fn document(&mut self, text: &str);
}
