pub mod descriptor;
pub mod manager;
pub mod registry;
pub mod remove;
pub mod require;
pub mod stop;

#[cfg(test)]
pub(crate) mod testing;

use crate::runtime::ContainerRuntimeGuard;
use manager::StackManager;
use registry::StackRegistry;
use std::path::{Path, PathBuf};

/// The collaborators a stack command delegates to.
pub struct StackServices<'a> {
    pub runtime: &'a dyn ContainerRuntimeGuard,
    pub registry: &'a dyn StackRegistry,
    pub manager: &'a mut dyn StackManager,
}

/// The directory holding a stack's configuration and state.
pub fn stack_dir(stacks_root: &Path, name: &str) -> PathBuf {
    stacks_root.join(name)
}
