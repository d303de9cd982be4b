use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Routes were collected and printed
/// - `Error` (2): The run failed (unreadable directory, bad root, write error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Routes were collected and printed.
    Success,
    /// The run failed before any output was written.
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
