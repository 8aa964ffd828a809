//! Output verbosity mode.

/// How much besides the report gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report plus warnings.
    #[default]
    Normal,
    /// Report and errors only (`--quiet`).
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Whether warnings are printed.
    pub fn shows_warnings(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
