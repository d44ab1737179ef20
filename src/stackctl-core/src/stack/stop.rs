use crate::error::stop_stack::StopStackError;
use crate::error::stop_stack::StopStackError::{Load, Stop, WriteOutputFailed};
use crate::stack::require::require_stack;
use crate::stack::StackServices;
use std::io::Write;

/// Stops a stack's services without removing anything.
pub struct StopStackCommand<'a> {
    pub stack_name: Option<&'a str>,
    pub verbose: bool,
}

impl StopStackCommand<'_> {
    pub fn run(
        &self,
        services: StackServices<'_>,
        out: &mut dyn Write,
    ) -> Result<(), StopStackError> {
        let name = require_stack(services.runtime, services.registry, self.stack_name)?;

        write!(out, "stopping stack '{name}'... ").map_err(WriteOutputFailed)?;
        out.flush().map_err(WriteOutputFailed)?;

        services.manager.load(name, self.verbose).map_err(Load)?;
        services.manager.stop(self.verbose).map_err(Stop)?;

        writeln!(out, "done").map_err(WriteOutputFailed)?;
        Ok(())
    }
}
