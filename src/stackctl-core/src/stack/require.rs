use crate::error::require_stack::RequireStackError;
use crate::error::require_stack::RequireStackError::{NoStackSpecified, StackDoesNotExist};
use crate::runtime::ContainerRuntimeGuard;
use crate::stack::registry::StackRegistry;

/// Pre-flight shared by commands that act on one existing stack: the container
/// runtime must be usable, a stack name must be given, and the stack must exist.
pub fn require_stack<'n>(
    runtime: &dyn ContainerRuntimeGuard,
    registry: &dyn StackRegistry,
    stack_name: Option<&'n str>,
) -> Result<&'n str, RequireStackError> {
    runtime.check()?;

    let name = stack_name
        .filter(|name| !name.is_empty())
        .ok_or(NoStackSpecified())?;

    if !registry.exists(name)? {
        return Err(StackDoesNotExist(name.to_string()));
    }
    Ok(name)
}
