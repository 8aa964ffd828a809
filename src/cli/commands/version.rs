//! The `ansys-report version` command.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the version of this tool.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.document(crate::version());
        Ok(CommandResult::success())
    }
}
