//! The `ansys-report project-info` command.
//!
//! Prints only the Ansys installation and environment-variable blocks. The
//! machine is not probed, so this works without a Python interpreter.

use std::collections::BTreeMap;

use crate::cli::args::{ProjectArgs, ProjectInfoArgs};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::report::{format_project_info, process_env};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The project-info command implementation.
pub struct ProjectInfoCommand {
    config: ReportConfig,
    args: ProjectInfoArgs,
}

impl ProjectInfoCommand {
    /// Create a new project-info command.
    pub fn new(config: ReportConfig, args: ProjectInfoArgs) -> Self {
        Self { config, args }
    }

    /// Render against a supplied environment.
    pub fn render_with_env<I>(&self, env: I) -> String
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let libs = merge_libs(&self.config, &self.args.project);
        let vars = merge_vars(&self.config, &self.args.project);
        format_project_info(libs.as_ref(), vars.as_deref(), env)
    }
}

impl Command for ProjectInfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.document(&self.render_with_env(process_env()));
        Ok(CommandResult::success())
    }
}

/// Config libraries with `--lib` entries laid over them.
pub(crate) fn merge_libs(
    config: &ReportConfig,
    args: &ProjectArgs,
) -> Option<BTreeMap<String, String>> {
    if args.libs.is_empty() {
        return config.ansys_libs.clone();
    }
    let mut libs = config.ansys_libs.clone().unwrap_or_default();
    libs.extend(args.libs.iter().cloned());
    Some(libs)
}

/// Config variables followed by `--var` entries, without duplicates.
pub(crate) fn merge_vars(config: &ReportConfig, args: &ProjectArgs) -> Option<Vec<String>> {
    if args.vars.is_empty() {
        return config.ansys_vars.clone();
    }
    let mut vars = config.ansys_vars.clone().unwrap_or_default();
    for var in &args.vars {
        if !vars.contains(var) {
            vars.push(var.clone());
        }
    }
    Some(vars)
}
