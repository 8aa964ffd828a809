//! Terminal UI.
//!
//! Documents go to stdout; status messages go to stderr so that
//! `ansys-report > report.txt` captures only the report.

use console::Term;
use std::io::Write;

use super::{OutputMode, ReportTheme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ReportTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: ReportTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn document(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
