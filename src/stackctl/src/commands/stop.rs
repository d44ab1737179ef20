use crate::lib::environment::Environment;
use crate::lib::error::StackResult;
use clap::Parser;
use stackctl_core::stack::manager::ComposeStackManager;
use stackctl_core::stack::registry::DiskStackRegistry;
use stackctl_core::stack::stop::StopStackCommand;
use stackctl_core::stack::StackServices;

/// Stops a running stack. Its containers and data are kept.
#[derive(Parser)]
pub struct StopOpts {
    /// The stack to stop.
    stack_name: Option<String>,
}

pub fn exec(env: &dyn Environment, opts: StopOpts) -> StackResult {
    let stacks_root = env.get_stacks_root();
    let runtime = env.get_runtime();

    let registry = DiskStackRegistry::new(stacks_root);
    let mut manager = ComposeStackManager::new(stacks_root, runtime.clone(), env.get_logger());

    StopStackCommand {
        stack_name: opts.stack_name.as_deref(),
        verbose: env.is_verbose(),
    }
    .run(
        StackServices {
            runtime,
            registry: &registry,
            manager: &mut manager,
        },
        &mut std::io::stdout(),
    )?;
    Ok(())
}
