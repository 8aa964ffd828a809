//! Styling for status lines on stderr.
//!
//! The report itself is never styled so it can be pasted into an issue
//! unchanged.

use console::Style;

/// Styles for warnings and errors.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    warning: Style,
    error: Style,
}

impl ReportTheme {
    /// Orange warnings, bold red errors.
    pub fn colored() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// No styling (non-TTY or `--no-color`).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Colored when stderr is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// A warning line, prefixed with a marker.
    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    /// An error line, text unchanged apart from styling.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled for status messages on stderr.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}
