use crate::lib::environment::Environment;
use crate::lib::error::StackResult;
use clap::Parser;
use stackctl_core::cli::TerminalConfirmer;
use stackctl_core::stack::manager::ComposeStackManager;
use stackctl_core::stack::registry::DiskStackRegistry;
use stackctl_core::stack::remove::RemoveStackCommand;
use stackctl_core::stack::StackServices;

/// Completely removes a stack, including all of its data and configuration.
/// A running stack is stopped first.
#[derive(Parser)]
pub struct RemoveOpts {
    /// The stack to remove.
    stack_name: Option<String>,

    /// Removes the stack without asking for confirmation.
    #[arg(long, short)]
    force: bool,
}

pub fn exec(env: &dyn Environment, opts: RemoveOpts) -> StackResult {
    let log = env.get_logger();
    let stacks_root = env.get_stacks_root();
    let runtime = env.get_runtime();

    let registry = DiskStackRegistry::new(stacks_root);
    let mut manager = ComposeStackManager::new(stacks_root, runtime.clone(), log);

    let command = RemoveStackCommand {
        stack_name: opts.stack_name.as_deref(),
        force: opts.force,
        verbose: env.is_verbose(),
        stacks_root,
        logger: log,
    };
    let services = StackServices {
        runtime,
        registry: &registry,
        manager: &mut manager,
    };
    command.run(
        services,
        &TerminalConfirmer::new(log),
        &mut std::io::stdout(),
    )?;
    Ok(())
}
