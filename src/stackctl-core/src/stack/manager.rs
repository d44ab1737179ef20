use crate::error::stack_manager::StackManagerError;
use crate::error::stack_manager::StackManagerError::{
    ComposeCommandFailed, LoadStackFailed, StackNameMismatch, StackNotLoaded,
};
use crate::json::load_json_file;
use crate::process::{capture_process_output, describe_command, execute_process};
use crate::runtime::DockerRuntime;
use crate::stack::descriptor::{StackDescriptor, STACK_DESCRIPTOR_FILE};
use crate::stack::stack_dir;
use slog::{debug, Logger};
use std::path::{Path, PathBuf};

/// Lifecycle operations on a single stack.
///
/// `load` binds the manager to an existing stack; `stop` and `remove` then
/// operate on that stack.
pub trait StackManager {
    fn load(&mut self, name: &str, verbose: bool) -> Result<(), StackManagerError>;

    /// Stops the stack's services. Succeeds if they are already stopped.
    fn stop(&mut self, verbose: bool) -> Result<(), StackManagerError>;

    /// Tears down the stack's containers, networks and volumes.
    fn remove(&mut self, verbose: bool) -> Result<(), StackManagerError>;
}

struct LoadedStack {
    name: String,
    dir: PathBuf,
    descriptor: StackDescriptor,
}

/// Drives a stack through `docker compose`.
pub struct ComposeStackManager {
    stacks_root: PathBuf,
    runtime: DockerRuntime,
    logger: Logger,
    stack: Option<LoadedStack>,
}

impl ComposeStackManager {
    pub fn new(stacks_root: &Path, runtime: DockerRuntime, logger: &Logger) -> Self {
        Self {
            stacks_root: stacks_root.to_path_buf(),
            runtime,
            logger: logger.clone(),
            stack: None,
        }
    }

    pub fn descriptor(&self) -> Option<&StackDescriptor> {
        self.stack.as_ref().map(|stack| &stack.descriptor)
    }

    fn run_compose(&self, args: &[&str], verbose: bool) -> Result<(), StackManagerError> {
        let stack = self.stack.as_ref().ok_or(StackNotLoaded())?;
        let mut cmd = self.runtime.compose_command(
            &stack.name,
            stack.descriptor.compose_file(),
            &stack.dir,
        )?;
        cmd.args(args);
        let command = describe_command(&cmd);
        debug!(self.logger, "Running '{}' in {}", command, stack.dir.display());

        // Verbose runs stream compose output straight to the terminal.
        let (status, stderr) = if verbose {
            (execute_process(&mut cmd)?, String::new())
        } else {
            let output = capture_process_output(&mut cmd)?;
            (
                output.status,
                String::from_utf8_lossy(&output.stderr).into_owned(),
            )
        };

        if !status.success() {
            return Err(ComposeCommandFailed {
                command,
                code: status.code(),
                stderr,
            });
        }
        Ok(())
    }
}

impl StackManager for ComposeStackManager {
    fn load(&mut self, name: &str, _verbose: bool) -> Result<(), StackManagerError> {
        let dir = stack_dir(&self.stacks_root, name);
        let descriptor: StackDescriptor = load_json_file(&dir.join(STACK_DESCRIPTOR_FILE))
            .map_err(|err| LoadStackFailed(name.to_string(), err))?;
        // The compose project is the directory name; a descriptor naming
        // another stack would point teardown at the wrong project.
        if descriptor.name != name {
            return Err(StackNameMismatch {
                stack: name.to_string(),
                descriptor_name: descriptor.name,
            });
        }
        debug!(
            self.logger,
            "Loaded stack '{}' with compose file {}",
            name,
            descriptor.compose_file()
        );
        self.stack = Some(LoadedStack {
            name: name.to_string(),
            dir,
            descriptor,
        });
        Ok(())
    }

    fn stop(&mut self, verbose: bool) -> Result<(), StackManagerError> {
        self.run_compose(&["stop"], verbose)
    }

    fn remove(&mut self, verbose: bool) -> Result<(), StackManagerError> {
        self.run_compose(&["down", "--volumes", "--remove-orphans"], verbose)
    }
}
