use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): run completed, including runs that reported duplicate
///   keys or unlocalized literals
/// - `Error` (2): run aborted (missing resource file, config error, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
