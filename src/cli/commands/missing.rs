use anyhow::Result;

use super::super::args::MissingCommand;
use super::helper::open_project;
use super::{CommandResult, CommandSummary, MissingSummary};

pub fn missing(cmd: MissingCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common)?;
    let manager = project.manager()?;

    let mut languages = Vec::new();
    for language in manager.languages(cmd.language.as_deref())?.into_keys() {
        let found = if cmd.include_empty {
            manager.find_untranslated(&language)?
        } else {
            manager.find_missing_translations(&language)?
        };
        languages.push((language, found));
    }

    let finding_count = languages.iter().map(|(_, set)| set.len()).sum();

    Ok(CommandResult {
        summary: CommandSummary::Missing(MissingSummary {
            languages,
            include_empty: cmd.include_empty,
        }),
        finding_count,
        exit_on_findings: true,
    })
}
