use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::CommandResult;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_status_from_result(&result).into())
}

fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_findings && result.finding_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
