use crate::error::process::ProcessError;
use crate::error::runtime::{format_stderr, ContainerRuntimeError};
use crate::error::structured_file::StructuredFileError;
use crate::stack::descriptor::STACK_DESCRIPTOR_FILE;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackManagerError {
    #[error("Command '{command}' finished with {}{}", describe_exit(.code), format_stderr(.stderr))]
    ComposeCommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to load stack '{0}'")]
    LoadStackFailed(String, #[source] StructuredFileError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Runtime(#[from] ContainerRuntimeError),

    #[error("{} in stack '{stack}' belongs to stack '{descriptor_name}'", STACK_DESCRIPTOR_FILE)]
    StackNameMismatch {
        stack: String,
        descriptor_name: String,
    },

    #[error("No stack has been loaded")]
    StackNotLoaded(),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
