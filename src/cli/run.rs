//! Dispatches parsed arguments to the matching command handler.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, add::add, init::init, languages::languages, list::list, missing::missing,
        sync::sync, translate::translate,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Missing(cmd)) => missing(cmd),
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Add(cmd)) => add(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
