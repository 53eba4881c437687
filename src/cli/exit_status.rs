use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for checker tools.
///
/// - `Success` (0): Command completed successfully, nothing to report
/// - `Failure` (1): Command completed but found problems (e.g. missing keys)
/// - `Error` (2): Command failed due to internal error (invalid config, unreadable file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, nothing to report.
    Success,
    /// Command completed but found problems (e.g. missing keys).
    Failure,
    /// Command failed due to internal error (invalid config, unreadable file).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
