use anyhow::Result;

use super::super::args::AddCommand;
use super::helper::open_project;
use super::{AddSummary, CommandResult, CommandSummary};
use crate::core::{NewTranslation, data::KeyPath};

pub fn add(cmd: AddCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common)?;
    let mut manager = project.manager()?;

    let translation = NewTranslation {
        namespace: cmd.namespace,
        group: cmd.group,
        key: cmd.key,
        value: cmd.value,
    };
    let action = manager.add(&cmd.language, &translation)?;
    let path = KeyPath::new(
        translation.kind(),
        translation.qualified_group(),
        translation.key,
    );

    Ok(CommandResult::info(CommandSummary::Add(AddSummary {
        language: cmd.language,
        path,
        action,
    })))
}
