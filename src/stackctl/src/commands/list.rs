use crate::lib::environment::Environment;
use crate::lib::error::StackResult;
use clap::Parser;
use slog::debug;
use stackctl_core::stack::registry::{DiskStackRegistry, StackRegistry};

/// Lists the stacks that exist.
#[derive(Parser)]
pub struct ListOpts {}

pub fn exec(env: &dyn Environment, _opts: ListOpts) -> StackResult {
    let stacks_root = env.get_stacks_root();
    debug!(env.get_logger(), "Listing stacks in {}", stacks_root.display());

    for name in DiskStackRegistry::new(stacks_root).list()? {
        println!("{name}");
    }
    Ok(())
}
