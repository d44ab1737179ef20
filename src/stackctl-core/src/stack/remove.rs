use crate::cli::Confirmer;
use crate::error::remove_stack::RemoveStackError;
use crate::error::remove_stack::RemoveStackError::{Load, Remove, Stop, WriteOutputFailed};
use crate::stack::require::require_stack;
use crate::stack::{stack_dir, StackServices};
use slog::{info, warn, Logger};
use std::io::Write;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined the confirmation prompt. Nothing was touched.
    Canceled,
}

/// Stops a stack, tears down its containers, networks and volumes, and
/// deletes its directory under the stacks root.
pub struct RemoveStackCommand<'a> {
    pub stack_name: Option<&'a str>,

    /// Skip the confirmation prompt.
    pub force: bool,

    /// Passed through to the stack manager.
    pub verbose: bool,

    pub stacks_root: &'a Path,
    pub logger: &'a Logger,
}

impl RemoveStackCommand<'_> {
    pub fn run(
        &self,
        services: StackServices<'_>,
        confirmer: &dyn Confirmer,
        out: &mut dyn Write,
    ) -> Result<RemoveOutcome, RemoveStackError> {
        let log = self.logger;
        let name = require_stack(services.runtime, services.registry, self.stack_name)?;

        if !self.force {
            confirmer.warn(
                "This will completely remove your stack and all of its data. Are you sure this is what you want to do?",
            );
            if !confirmer.ask(&format!("Completely delete stack '{name}'")) {
                writeln!(out, "canceled").map_err(WriteOutputFailed)?;
                return Ok(RemoveOutcome::Canceled);
            }
        }

        write!(out, "deleting stack '{name}'... ").map_err(WriteOutputFailed)?;
        out.flush().map_err(WriteOutputFailed)?;

        services.manager.load(name, self.verbose).map_err(Load)?;
        services.manager.stop(self.verbose).map_err(Stop)?;
        services.manager.remove(self.verbose).map_err(Remove)?;

        // Containers are gone at this point, so a leftover directory is only a warning.
        let dir = stack_dir(self.stacks_root, name);
        match crate::fs::remove_dir_all(&dir) {
            Ok(()) => info!(log, "Deleted {}", dir.display()),
            Err(err) => warn!(log, "{}: {}", err, err.source),
        }

        writeln!(out, "done").map_err(WriteOutputFailed)?;
        Ok(RemoveOutcome::Removed)
    }
}
