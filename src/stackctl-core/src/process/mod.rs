use crate::error::process::ProcessError;
use std::process::{Command, ExitStatus, Output};

/// Runs the command with inherited stdio.
pub fn execute_process(cmd: &mut Command) -> Result<ExitStatus, ProcessError> {
    cmd.status()
        .map_err(|e| ProcessError::ExecutionFailed(cmd.get_program().to_owned(), e))
}

/// Runs the command, capturing stdout and stderr.
pub fn capture_process_output(cmd: &mut Command) -> Result<Output, ProcessError> {
    cmd.output()
        .map_err(|e| ProcessError::ExecutionFailed(cmd.get_program().to_owned(), e))
}

/// Renders a command line for error messages, e.g. `docker compose -p demo stop`.
pub fn describe_command(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
