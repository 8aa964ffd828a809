//! The `ansys-report show` command.
//!
//! Builds the full report and prints it in the requested format. This is
//! also what runs when no subcommand is given.

use crate::cli::args::{Format, ShowArgs};
use crate::config::ReportConfig;
use crate::error::Result;
use std::path::PathBuf;

use crate::probe::python::{parse_system_path, PYTHON_ENV_VAR};
use crate::probe::{Introspector, PythonIntrospector};
use crate::report::{Report, ReportOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project_info::{merge_libs, merge_vars};

const NO_INTERPRETER: &str =
    "No Python interpreter found; set ANSYS_REPORT_PYTHON or use --python";

/// The show command implementation.
pub struct ShowCommand {
    config: ReportConfig,
    args: ShowArgs,
    introspector: Option<Box<dyn Introspector>>,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(config: ReportConfig, args: ShowArgs) -> Self {
        Self {
            config,
            args,
            introspector: None,
        }
    }

    /// Probe through the given introspector instead of a Python interpreter.
    pub fn with_introspector(mut self, introspector: Box<dyn Introspector>) -> Self {
        self.introspector = Some(introspector);
        self
    }

    /// Config values with command-line flags applied on top.
    pub fn options(&self) -> ReportOptions {
        let mut options = self.config.to_options();
        options
            .additional
            .extend(self.args.additional.iter().cloned());
        if let Some(ncol) = self.args.ncol {
            options.ncol = ncol;
        }
        if let Some(width) = self.args.text_width {
            options.text_width = width;
        }
        options.sort |= self.args.sort;
        if self.args.no_gpu {
            options.gpu = false;
        }
        options.ansys_libs = merge_libs(&self.config, &self.args.project);
        options.ansys_vars = merge_vars(&self.config, &self.args.project);
        options
    }

    fn python(&self) -> PythonIntrospector {
        self.python_with_env(|key: &str| std::env::var(key), &parse_system_path())
    }

    /// Pick the interpreter: `--python`, then `ANSYS_REPORT_PYTHON`, then the
    /// config file, then PATH.
    ///
    /// The env var is read here too since a bare `ansys-report` builds its
    /// [`ShowArgs`] without clap.
    pub fn python_with_env<F>(&self, env_fn: F, path_entries: &[PathBuf]) -> PythonIntrospector
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        if let Some(exe) = &self.args.python {
            return PythonIntrospector::new(exe);
        }
        if let Ok(exe) = env_fn(PYTHON_ENV_VAR) {
            if !exe.trim().is_empty() {
                return PythonIntrospector::new(exe);
            }
        }
        if let Some(exe) = &self.config.python {
            tracing::debug!("Using interpreter from config: {}", exe.display());
            return PythonIntrospector::new(exe);
        }
        PythonIntrospector::detect_with_env(env_fn, path_entries)
    }

    fn build(&self) -> Result<Report> {
        let options = self.options();
        match &self.introspector {
            Some(introspector) => Report::with_introspector(options, introspector.as_ref()),
            None => Report::with_introspector(options, &self.python()),
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.build()?;
        if report.python().is_none() {
            ui.warning(NO_INTERPRETER);
        }

        let document = match self.args.format {
            Format::Text => report.render(),
            Format::Html => report.render_html(),
            Format::Json => report.to_json()?,
        };
        ui.document(&document);
        Ok(CommandResult::success())
    }
}
