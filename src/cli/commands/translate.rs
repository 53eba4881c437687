use anyhow::Result;

use super::super::{args::TranslateCommand, report::print_language_done};
use super::helper::open_project;
use super::{CommandResult, CommandSummary, TranslateRunSummary};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common)?;
    let mut manager = project.manager()?;
    let provider = project.provider();

    let languages = manager.auto_translate(cmd.language.as_deref(), &provider, print_language_done)?;
    let finding_count = languages.iter().map(|l| l.failures.len()).sum();

    Ok(CommandResult {
        summary: CommandSummary::Translate(TranslateRunSummary { languages }),
        finding_count,
        exit_on_findings: true,
    })
}
