use anyhow::Result;

use super::super::args::SyncCommand;
use super::helper::open_project;
use super::{CommandResult, CommandSummary, SyncSummary};
use crate::core::SavedMissing;

pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common)?;
    let mut manager = project.manager()?;

    let languages = if cmd.apply {
        manager.save_missing_translations(cmd.language.as_deref())?
    } else {
        let mut preview = Vec::new();
        for language in manager.languages(cmd.language.as_deref())?.into_keys() {
            let keys = manager
                .find_missing_translations(&language)?
                .iter()
                .map(|entry| entry.path())
                .collect();
            preview.push(SavedMissing { language, keys });
        }
        preview
    };

    let finding_count = languages.iter().map(|l| l.keys.len()).sum();

    Ok(CommandResult {
        summary: CommandSummary::Sync(SyncSummary {
            languages,
            is_apply: cmd.apply,
        }),
        finding_count,
        exit_on_findings: false,
    })
}
