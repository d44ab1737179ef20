use crate::error::runtime::ContainerRuntimeError;
use crate::error::stack_registry::StackRegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequireStackError {
    #[error(transparent)]
    RuntimeUnavailable(#[from] ContainerRuntimeError),

    #[error("no stack specified")]
    NoStackSpecified(),

    #[error(transparent)]
    Registry(#[from] StackRegistryError),

    #[error("stack '{0}' does not exist")]
    StackDoesNotExist(String),
}
