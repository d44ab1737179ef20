//! Access to the container engine that runs stack services.
use crate::error::runtime::ContainerRuntimeError;
use crate::process::capture_process_output;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_DOCKER_PROGRAM: &str = "docker";

/// Verifies that the container engine is installed and usable before any
/// stack operation touches it.
pub trait ContainerRuntimeGuard {
    fn check(&self) -> Result<(), ContainerRuntimeError>;
}

/// The `docker` CLI with its `compose` plugin.
#[derive(Clone, Debug)]
pub struct DockerRuntime {
    program: String,
}

impl DockerRuntime {
    pub fn new(program: Option<String>) -> Self {
        Self {
            program: program.unwrap_or_else(|| DEFAULT_DOCKER_PROGRAM.to_string()),
        }
    }

    /// Resolves the configured program against `PATH` (or as a path, if it contains a separator).
    pub fn resolve(&self) -> Result<PathBuf, ContainerRuntimeError> {
        which::which(&self.program)
            .map_err(|err| ContainerRuntimeError::DockerNotFound(self.program.clone(), err))
    }

    /// `docker compose -p <project> -f <compose_file>`, run from `dir`.
    pub fn compose_command(
        &self,
        project: &str,
        compose_file: &str,
        dir: &Path,
    ) -> Result<Command, ContainerRuntimeError> {
        let mut cmd = Command::new(self.resolve()?);
        cmd.args(["compose", "-p", project, "-f", compose_file])
            .current_dir(dir);
        Ok(cmd)
    }
}

impl ContainerRuntimeGuard for DockerRuntime {
    fn check(&self) -> Result<(), ContainerRuntimeError> {
        let mut cmd = Command::new(self.resolve()?);
        cmd.args(["compose", "version"]);
        let output = capture_process_output(&mut cmd)?;
        if !output.status.success() {
            return Err(ContainerRuntimeError::ComposeUnavailable(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_docker() {
        assert_eq!(DockerRuntime::new(None).program, DEFAULT_DOCKER_PROGRAM);
    }

    #[test]
    fn missing_program_fails_the_check() {
        let runtime = DockerRuntime::new(Some("stackctl-no-such-docker".to_string()));
        match runtime.check() {
            Err(ContainerRuntimeError::DockerNotFound(program, _)) => {
                assert_eq!(program, "stackctl-no-such-docker")
            }
            other => panic!("expected DockerNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn failing_compose_plugin_is_reported() {
        let runtime = DockerRuntime::new(Some("false".to_string()));
        let err = runtime.check().unwrap_err();
        assert!(matches!(err, ContainerRuntimeError::ComposeUnavailable(_)));
        assert_eq!(err.to_string(), "'docker compose' is not available");
    }

    #[cfg(unix)]
    #[test]
    fn working_compose_plugin_passes() {
        DockerRuntime::new(Some("true".to_string())).check().unwrap();
    }
}
