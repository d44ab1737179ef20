use crate::error::process::ProcessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerRuntimeError {
    #[error("Cannot find container runtime '{0}'")]
    DockerNotFound(String, #[source] which::Error),

    #[error("'docker compose' is not available{}", format_stderr(.0))]
    ComposeUnavailable(String),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Appends captured stderr to an error message, if there is any.
pub(crate) fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
