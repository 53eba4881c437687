use anyhow::Result;

use super::super::args::LanguagesCommand;
use super::helper::open_project;
use super::{CommandResult, CommandSummary, LanguagesSummary};

pub fn languages(cmd: LanguagesCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common)?;
    let manager = project.manager()?;

    Ok(CommandResult::info(CommandSummary::Languages(
        LanguagesSummary {
            source_language: manager.source_language().to_string(),
            languages: manager.languages(None)?,
        },
    )))
}
