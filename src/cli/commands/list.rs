use anyhow::Result;

use super::super::args::ListCommand;
use super::helper::open_project;
use super::{CommandResult, CommandSummary, ListSummary};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common)?;
    let manager = project.manager()?;

    let view = manager.filter_translations_for(&cmd.language, cmd.filter.as_deref())?;

    Ok(CommandResult::info(CommandSummary::List(ListSummary {
        view,
        filter: cmd.filter,
    })))
}
